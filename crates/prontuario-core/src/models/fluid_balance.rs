use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::parse;

/// One of the six volume fields of the fluid balance sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FluidField {
    IntakeOral,
    IntakeParenteral,
    IntakeOther,
    OutputUrine,
    OutputEmesis,
    OutputDrains,
}

impl FluidField {
    pub const ALL: [FluidField; 6] = [
        FluidField::IntakeOral,
        FluidField::IntakeParenteral,
        FluidField::IntakeOther,
        FluidField::OutputUrine,
        FluidField::OutputEmesis,
        FluidField::OutputDrains,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FluidField::IntakeOral => "intakeOral",
            FluidField::IntakeParenteral => "intakeParenteral",
            FluidField::IntakeOther => "intakeOther",
            FluidField::OutputUrine => "outputUrine",
            FluidField::OutputEmesis => "outputEmesis",
            FluidField::OutputDrains => "outputDrains",
        }
    }

    pub fn is_intake(self) -> bool {
        matches!(
            self,
            FluidField::IntakeOral | FluidField::IntakeParenteral | FluidField::IntakeOther
        )
    }
}

impl FromStr for FluidField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FluidField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownFluidField(s.to_string()))
    }
}

/// Intake and output volumes (mL) as typed into the sheet, plus the
/// derived net balance.
///
/// `balance_total` always equals total intake minus total output, with
/// unreadable fields counted as zero. Positive means net gain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct FluidBalanceRecord {
    pub intake_oral: String,
    pub intake_parenteral: String,
    pub intake_other: String,
    pub output_urine: String,
    pub output_emesis: String,
    pub output_drains: String,
    pub balance_total: f64,
}

impl FluidBalanceRecord {
    pub fn field(&self, field: FluidField) -> &str {
        match field {
            FluidField::IntakeOral => &self.intake_oral,
            FluidField::IntakeParenteral => &self.intake_parenteral,
            FluidField::IntakeOther => &self.intake_other,
            FluidField::OutputUrine => &self.output_urine,
            FluidField::OutputEmesis => &self.output_emesis,
            FluidField::OutputDrains => &self.output_drains,
        }
    }

    /// Replace one field and recompute the whole balance.
    pub fn set_field(&mut self, field: FluidField, value: impl Into<String>) {
        let slot = match field {
            FluidField::IntakeOral => &mut self.intake_oral,
            FluidField::IntakeParenteral => &mut self.intake_parenteral,
            FluidField::IntakeOther => &mut self.intake_other,
            FluidField::OutputUrine => &mut self.output_urine,
            FluidField::OutputEmesis => &mut self.output_emesis,
            FluidField::OutputDrains => &mut self.output_drains,
        };
        *slot = value.into();
        self.balance_total = self.compute_total();
    }

    /// Volume of one field in mL, zero when unreadable.
    pub fn volume(&self, field: FluidField) -> f64 {
        parse::decimal(self.field(field)).unwrap_or(0.0)
    }

    pub fn intake_total(&self) -> f64 {
        FluidField::ALL
            .into_iter()
            .filter(|f| f.is_intake())
            .map(|f| self.volume(f))
            .sum()
    }

    pub fn output_total(&self) -> f64 {
        FluidField::ALL
            .into_iter()
            .filter(|f| !f.is_intake())
            .map(|f| self.volume(f))
            .sum()
    }

    /// Return the record with `balance_total` recomputed from all six
    /// fields. Any stored total is ignored.
    pub fn recompute(mut self) -> Self {
        self.balance_total = self.compute_total();
        self
    }

    fn compute_total(&self) -> f64 {
        self.intake_total() - self.output_total()
    }
}
