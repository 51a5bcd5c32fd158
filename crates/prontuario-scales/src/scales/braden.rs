use prontuario_core::models::braden::{BradenAssessment, BradenItem, BradenScore, BradenTier};

use super::{entry_points, item};
use crate::RiskScale;
use crate::error::ScaleError;
use crate::scoring::{ScaleItem, ScaleResult, ScoreEntry};

/// Braden Scale for predicting pressure-injury risk.
/// Six items rated 1–4 (friction 1–3). Total 6–23; lower is riskier.
pub struct Braden;

impl RiskScale for Braden {
    fn id(&self) -> &str {
        "braden"
    }

    fn name(&self) -> &str {
        "Escala de Braden"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            vec![
                item(
                    BradenItem::Sensory.id(),
                    "Percepção Sensorial",
                    &[
                        (1, "Completamente limitado"),
                        (2, "Muito limitado"),
                        (3, "Levemente limitado"),
                        (4, "Nenhuma limitação"),
                    ],
                ),
                item(
                    BradenItem::Moisture.id(),
                    "Umidade",
                    &[
                        (1, "Completamente molhada"),
                        (2, "Muito molhada"),
                        (3, "Ocasionalmente molhada"),
                        (4, "Raramente molhada"),
                    ],
                ),
                item(
                    BradenItem::Activity.id(),
                    "Atividade",
                    &[
                        (1, "Acamado"),
                        (2, "Confinado à cadeira"),
                        (3, "Anda ocasionalmente"),
                        (4, "Anda frequentemente"),
                    ],
                ),
                item(
                    BradenItem::Mobility.id(),
                    "Mobilidade",
                    &[
                        (1, "Completamente imóvel"),
                        (2, "Bastante limitado"),
                        (3, "Levemente limitado"),
                        (4, "Não apresenta limitações"),
                    ],
                ),
                item(
                    BradenItem::Nutrition.id(),
                    "Nutrição",
                    &[
                        (1, "Muito pobre"),
                        (2, "Provavelmente inadequada"),
                        (3, "Adequada"),
                        (4, "Excelente"),
                    ],
                ),
                item(
                    BradenItem::Friction.id(),
                    "Fricção e Cisalhamento",
                    &[
                        (1, "Problema"),
                        (2, "Problema em potencial"),
                        (3, "Nenhum problema"),
                    ],
                ),
            ]
        });
        &ITEMS
    }

    fn assess(&self, entries: &[ScoreEntry]) -> Result<ScaleResult, ScaleError> {
        let result = score(&assessment_from_entries(entries)?);
        Ok(ScaleResult {
            scale_id: self.id().to_string(),
            total: result.total,
            tier: result.tier.label().to_string(),
            filled: result.tier != BradenTier::NotFilled,
        })
    }
}

/// Map a Braden total to its tier. An assessment with nothing entered
/// (or summing to zero) is `NotFilled`, never `VeryHigh`.
pub fn tier(total: u32, filled: bool) -> BradenTier {
    match total {
        _ if !filled => BradenTier::NotFilled,
        0 => BradenTier::NotFilled,
        19.. => BradenTier::NoRisk,
        15..=18 => BradenTier::Mild,
        13..=14 => BradenTier::Moderate,
        10..=12 => BradenTier::High,
        _ => BradenTier::VeryHigh,
    }
}

pub fn score(assessment: &BradenAssessment) -> BradenScore {
    let total = assessment.total();
    BradenScore {
        total,
        tier: tier(total, assessment.is_filled()),
    }
}

/// Build a typed assessment from entries; items without an entry stay unset.
pub fn assessment_from_entries(entries: &[ScoreEntry]) -> Result<BradenAssessment, ScaleError> {
    let mut assessment = BradenAssessment::default();
    for entry in entries {
        let item = BradenItem::from_id(&entry.item_id).ok_or_else(|| ScaleError::UnknownItem {
            scale_id: Braden.id().to_string(),
            item_id: entry.item_id.clone(),
        })?;
        assessment.set(item, entry_points(entry)?);
    }
    Ok(assessment)
}

/// Entries for every item that is set, in form order.
pub fn entries(assessment: &BradenAssessment) -> Vec<ScoreEntry> {
    BradenItem::ALL
        .into_iter()
        .filter_map(|item| {
            assessment
                .get(item)
                .map(|value| ScoreEntry::new(item.id(), u32::from(value)))
        })
        .collect()
}
