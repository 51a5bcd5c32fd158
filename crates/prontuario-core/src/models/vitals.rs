use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The vital signs charted on the nursing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum VitalSign {
    BloodPressure,
    Pulse,
    HeartRate,
    Temperature,
    Saturation,
    Glycemia,
    Co2,
    Oxygen,
}

impl VitalSign {
    pub const ALL: [VitalSign; 8] = [
        VitalSign::BloodPressure,
        VitalSign::Pulse,
        VitalSign::HeartRate,
        VitalSign::Temperature,
        VitalSign::Saturation,
        VitalSign::Glycemia,
        VitalSign::Co2,
        VitalSign::Oxygen,
    ];

    /// Wire tag, as used by the browser client.
    pub fn as_str(self) -> &'static str {
        match self {
            VitalSign::BloodPressure => "bloodPressure",
            VitalSign::Pulse => "pulse",
            VitalSign::HeartRate => "heartRate",
            VitalSign::Temperature => "temperature",
            VitalSign::Saturation => "saturation",
            VitalSign::Glycemia => "glycemia",
            VitalSign::Co2 => "co2",
            VitalSign::Oxygen => "oxygen",
        }
    }

    /// Display name shown on the chart.
    pub fn label(self) -> &'static str {
        match self {
            VitalSign::BloodPressure => "Pressão Arterial",
            VitalSign::Pulse => "Pulso",
            VitalSign::HeartRate => "Frequência Cardíaca",
            VitalSign::Temperature => "Temperatura",
            VitalSign::Saturation => "Saturação de O₂",
            VitalSign::Glycemia => "Glicemia",
            VitalSign::Co2 => "CO₂",
            VitalSign::Oxygen => "Fluxo de O₂",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalSign::BloodPressure => "mmHg",
            VitalSign::Pulse | VitalSign::HeartRate => "bpm",
            VitalSign::Temperature => "°C",
            VitalSign::Saturation => "%",
            VitalSign::Glycemia => "mg/dL",
            VitalSign::Co2 => "mmHg",
            VitalSign::Oxygen => "L/min",
        }
    }
}

impl fmt::Display for VitalSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalSign {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VitalSign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVitalSign(s.to_string()))
    }
}

/// Severity of a single reading. Ordered so that `max` picks the worst.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VitalStatus {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl VitalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::Warning => "warning",
            VitalStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw reading as typed into the form. The value is kept as text; the
/// classifier owns the parse step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VitalReading {
    pub sign: VitalSign,
    pub value: String,
}

impl VitalReading {
    pub fn new(sign: VitalSign, value: impl Into<String>) -> Self {
        Self {
            sign,
            value: value.into(),
        }
    }
}

/// Classification of one reading. `message` is present only when the
/// status is not normal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VitalAnalysis {
    pub status: VitalStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl VitalAnalysis {
    pub fn normal() -> Self {
        Self::default()
    }

    pub fn flagged(status: VitalStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.status != VitalStatus::Normal
    }
}

/// A blood pressure pair parsed from `"systolic/diastolic"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

impl BloodPressure {
    /// Split on `/` and read each half with non-digits stripped. Anything
    /// other than exactly two readable halves yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('/');
        let (Some(systolic), Some(diastolic), None) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        Some(Self {
            systolic: crate::parse::digits_only(systolic)?,
            diastolic: crate::parse::digits_only(diastolic)?,
        })
    }
}
