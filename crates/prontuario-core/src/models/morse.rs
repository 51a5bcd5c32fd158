use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six items of the Morse fall scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MorseItem {
    History,
    Diagnosis,
    AmbulatoryAid,
    IvTherapy,
    Gait,
    MentalStatus,
}

impl MorseItem {
    pub const ALL: [MorseItem; 6] = [
        MorseItem::History,
        MorseItem::Diagnosis,
        MorseItem::AmbulatoryAid,
        MorseItem::IvTherapy,
        MorseItem::Gait,
        MorseItem::MentalStatus,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MorseItem::History => "history",
            MorseItem::Diagnosis => "diagnosis",
            MorseItem::AmbulatoryAid => "ambulatoryAid",
            MorseItem::IvTherapy => "ivTherapy",
            MorseItem::Gait => "gait",
            MorseItem::MentalStatus => "mentalStatus",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        MorseItem::ALL.into_iter().find(|item| item.id() == id)
    }
}

/// A Morse assessment. Every item has 0 as a valid option, so a blank
/// assessment is simply a zero score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MorseAssessment {
    pub history: u8,
    pub diagnosis: u8,
    pub ambulatory_aid: u8,
    pub iv_therapy: u8,
    pub gait: u8,
    pub mental_status: u8,
}

impl MorseAssessment {
    pub fn get(&self, item: MorseItem) -> u8 {
        match item {
            MorseItem::History => self.history,
            MorseItem::Diagnosis => self.diagnosis,
            MorseItem::AmbulatoryAid => self.ambulatory_aid,
            MorseItem::IvTherapy => self.iv_therapy,
            MorseItem::Gait => self.gait,
            MorseItem::MentalStatus => self.mental_status,
        }
    }

    pub fn set(&mut self, item: MorseItem, value: u8) {
        let slot = match item {
            MorseItem::History => &mut self.history,
            MorseItem::Diagnosis => &mut self.diagnosis,
            MorseItem::AmbulatoryAid => &mut self.ambulatory_aid,
            MorseItem::IvTherapy => &mut self.iv_therapy,
            MorseItem::Gait => &mut self.gait,
            MorseItem::MentalStatus => &mut self.mental_status,
        };
        *slot = value;
    }

    pub fn total(&self) -> u32 {
        MorseItem::ALL
            .into_iter()
            .map(|item| u32::from(self.get(item)))
            .sum()
    }
}

/// Fall risk band. Serialized as the label shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MorseTier {
    #[serde(rename = "Baixo Risco")]
    Low,
    #[serde(rename = "Médio Risco")]
    Medium,
    #[serde(rename = "Alto Risco")]
    High,
}

impl MorseTier {
    pub fn label(self) -> &'static str {
        match self {
            MorseTier::Low => "Baixo Risco",
            MorseTier::Medium => "Médio Risco",
            MorseTier::High => "Alto Risco",
        }
    }
}

impl fmt::Display for MorseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MorseScore {
    pub total: u32,
    pub tier: MorseTier,
}
