use prontuario_core::models::morse::{MorseAssessment, MorseItem, MorseScore, MorseTier};

use super::{entry_points, item};
use crate::RiskScale;
use crate::error::ScaleError;
use crate::scoring::{ScaleItem, ScaleResult, ScoreEntry};

/// Morse Fall Scale. Six items with fixed point options; total 0–125,
/// higher is riskier.
pub struct Morse;

impl RiskScale for Morse {
    fn id(&self) -> &str {
        "morse"
    }

    fn name(&self) -> &str {
        "Escala de Morse"
    }

    fn items(&self) -> &[ScaleItem] {
        static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
            vec![
                item(
                    MorseItem::History.id(),
                    "Histórico de Quedas",
                    &[(0, "Não"), (25, "Sim")],
                ),
                item(
                    MorseItem::Diagnosis.id(),
                    "Diagnóstico Secundário",
                    &[(0, "Não"), (15, "Sim")],
                ),
                item(
                    MorseItem::AmbulatoryAid.id(),
                    "Auxílio na Deambulação",
                    &[
                        (0, "Nenhum/Acamado/Auxiliado por profissional"),
                        (15, "Muletas/Bengala/Andador"),
                        (30, "Mobiliário/Parede"),
                    ],
                ),
                item(
                    MorseItem::IvTherapy.id(),
                    "Terapia Endovenosa",
                    &[(0, "Não"), (20, "Sim")],
                ),
                item(
                    MorseItem::Gait.id(),
                    "Marcha",
                    &[
                        (0, "Normal/Sem deambulação/Acamado/Cadeira de rodas"),
                        (10, "Fraca"),
                        (20, "Comprometida/Cambaleante"),
                    ],
                ),
                item(
                    MorseItem::MentalStatus.id(),
                    "Estado Mental",
                    &[
                        (0, "Orientado/capaz quanto à sua capacidade"),
                        (15, "Superestima capacidade/Esquece limitações"),
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
            filled: true,
        })
    }
}

/// Map a Morse total to its tier. Zero is a real score here.
pub fn tier(total: u32) -> MorseTier {
    match total {
        45.. => MorseTier::High,
        25..=44 => MorseTier::Medium,
        _ => MorseTier::Low,
    }
}

pub fn score(assessment: &MorseAssessment) -> MorseScore {
    let total = assessment.total();
    MorseScore {
        total,
        tier: tier(total),
    }
}

/// Build a typed assessment from entries; items without an entry score 0.
pub fn assessment_from_entries(entries: &[ScoreEntry]) -> Result<MorseAssessment, ScaleError> {
    let mut assessment = MorseAssessment::default();
    for entry in entries {
        let item = MorseItem::from_id(&entry.item_id).ok_or_else(|| ScaleError::UnknownItem {
            scale_id: Morse.id().to_string(),
            item_id: entry.item_id.clone(),
        })?;
        assessment.set(item, entry_points(entry)?);
    }
    Ok(assessment)
}

pub fn entries(assessment: &MorseAssessment) -> Vec<ScoreEntry> {
    MorseItem::ALL
        .into_iter()
        .map(|item| ScoreEntry::new(item.id(), u32::from(assessment.get(item))))
        .collect()
}
