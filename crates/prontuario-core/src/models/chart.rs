use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::braden::BradenAssessment;
use super::fluid_balance::FluidBalanceRecord;
use super::morse::MorseAssessment;
use super::vitals::VitalReading;
use crate::error::CoreError;

/// Everything charted for one patient during a shift.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShiftChart {
    pub id: Uuid,
    pub patient_name: String,
    pub recorded_at: jiff::Timestamp,
    #[serde(default)]
    pub vitals: Vec<VitalReading>,
    #[serde(default)]
    pub fluid_balance: FluidBalanceRecord,
    #[serde(default)]
    pub braden: BradenAssessment,
    #[serde(default)]
    pub morse: MorseAssessment,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftChart {
    pub fn new(patient_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_name: patient_name.into(),
            recorded_at: jiff::Timestamp::now(),
            vitals: Vec::new(),
            fluid_balance: FluidBalanceRecord::default(),
            braden: BradenAssessment::default(),
            morse: MorseAssessment::default(),
            notes: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
