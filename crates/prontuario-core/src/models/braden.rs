use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six dimensions of the Braden pressure-injury scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum BradenItem {
    Sensory,
    Moisture,
    Activity,
    Mobility,
    Nutrition,
    Friction,
}

impl BradenItem {
    pub const ALL: [BradenItem; 6] = [
        BradenItem::Sensory,
        BradenItem::Moisture,
        BradenItem::Activity,
        BradenItem::Mobility,
        BradenItem::Nutrition,
        BradenItem::Friction,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BradenItem::Sensory => "sensory",
            BradenItem::Moisture => "moisture",
            BradenItem::Activity => "activity",
            BradenItem::Mobility => "mobility",
            BradenItem::Nutrition => "nutrition",
            BradenItem::Friction => "friction",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        BradenItem::ALL.into_iter().find(|item| item.id() == id)
    }
}

/// A Braden assessment being filled in by the clinician.
///
/// Sub-scores start unset (`None`); a blank assessment is "not filled in",
/// which is distinct from a low total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct BradenAssessment {
    pub sensory: Option<u8>,
    pub moisture: Option<u8>,
    pub activity: Option<u8>,
    pub mobility: Option<u8>,
    pub nutrition: Option<u8>,
    pub friction: Option<u8>,
}

impl BradenAssessment {
    pub fn get(&self, item: BradenItem) -> Option<u8> {
        match item {
            BradenItem::Sensory => self.sensory,
            BradenItem::Moisture => self.moisture,
            BradenItem::Activity => self.activity,
            BradenItem::Mobility => self.mobility,
            BradenItem::Nutrition => self.nutrition,
            BradenItem::Friction => self.friction,
        }
    }

    pub fn set(&mut self, item: BradenItem, value: u8) {
        let slot = match item {
            BradenItem::Sensory => &mut self.sensory,
            BradenItem::Moisture => &mut self.moisture,
            BradenItem::Activity => &mut self.activity,
            BradenItem::Mobility => &mut self.mobility,
            BradenItem::Nutrition => &mut self.nutrition,
            BradenItem::Friction => &mut self.friction,
        };
        *slot = Some(value);
    }

    /// Whether any sub-score has been set.
    pub fn is_filled(&self) -> bool {
        BradenItem::ALL.into_iter().any(|item| self.get(item).is_some())
    }

    /// Sum of the sub-scores that are set.
    pub fn total(&self) -> u32 {
        BradenItem::ALL
            .into_iter()
            .filter_map(|item| self.get(item))
            .map(u32::from)
            .sum()
    }
}

/// Pressure-injury risk band. Serialized as the label shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BradenTier {
    #[serde(rename = "Sem Risco")]
    NoRisk,
    #[serde(rename = "Risco Leve")]
    Mild,
    #[serde(rename = "Risco Moderado")]
    Moderate,
    #[serde(rename = "Risco Alto")]
    High,
    #[serde(rename = "Risco Muito Alto")]
    VeryHigh,
    #[serde(rename = "Não preenchido")]
    NotFilled,
}

impl BradenTier {
    pub fn label(self) -> &'static str {
        match self {
            BradenTier::NoRisk => "Sem Risco",
            BradenTier::Mild => "Risco Leve",
            BradenTier::Moderate => "Risco Moderado",
            BradenTier::High => "Risco Alto",
            BradenTier::VeryHigh => "Risco Muito Alto",
            BradenTier::NotFilled => "Não preenchido",
        }
    }
}

impl fmt::Display for BradenTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BradenScore {
    pub total: u32,
    pub tier: BradenTier,
}
