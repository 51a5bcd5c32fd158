use prontuario_core::models::vitals::{
    BloodPressure, VitalAnalysis, VitalReading, VitalSign, VitalStatus,
};
use prontuario_core::parse;

use VitalStatus::{Critical, Warning};

/// One row of a rule table: if `applies` holds, the reading gets
/// `status` and `message`.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    pub status: VitalStatus,
    pub message: &'static str,
    pub applies: fn(T) -> bool,
}

impl<T: Copy> Rule<T> {
    /// Evaluate `rules` top to bottom; the first match wins. No match is
    /// a normal reading.
    pub fn first_match(rules: &[Rule<T>], value: T) -> VitalAnalysis {
        rules
            .iter()
            .find(|rule| (rule.applies)(value))
            .map(|rule| VitalAnalysis::flagged(rule.status, rule.message))
            .unwrap_or_default()
    }
}

pub const BLOOD_PRESSURE_RULES: &[Rule<BloodPressure>] = &[
    Rule {
        status: Critical,
        message: "Crise Hipertensiva",
        applies: |bp| bp.systolic >= 180 || bp.diastolic >= 110,
    },
    Rule {
        status: Critical,
        message: "Hipotensão Severa",
        applies: |bp| bp.systolic < 80 || bp.diastolic < 50,
    },
    Rule {
        status: Warning,
        message: "Hipertensão",
        applies: |bp| bp.systolic >= 140 || bp.diastolic >= 90,
    },
    Rule {
        status: Warning,
        message: "Hipotensão",
        applies: |bp| bp.systolic < 100 || bp.diastolic < 60,
    },
];

/// Pulse and heart rate, in bpm.
pub const HEART_RATE_RULES: &[Rule<f64>] = &[
    Rule {
        status: Critical,
        message: "Taquicardia Severa",
        applies: |v| v > 140.0,
    },
    Rule {
        status: Critical,
        message: "Bradicardia Severa",
        applies: |v| v < 40.0,
    },
    Rule {
        status: Warning,
        message: "Taquicardia",
        applies: |v| v > 100.0,
    },
    Rule {
        status: Warning,
        message: "Bradicardia",
        applies: |v| v < 60.0,
    },
];

/// Axillary temperature, in °C.
pub const TEMPERATURE_RULES: &[Rule<f64>] = &[
    Rule {
        status: Critical,
        message: "Hipertermia",
        applies: |v| v > 39.5,
    },
    Rule {
        status: Critical,
        message: "Hipotermia",
        applies: |v| v < 35.0,
    },
    Rule {
        status: Warning,
        message: "Estado Febril",
        applies: |v| v >= 37.8,
    },
    Rule {
        status: Warning,
        message: "Hipotermia Leve",
        applies: |v| v < 36.0,
    },
];

/// Peripheral oxygen saturation, in %.
pub const SATURATION_RULES: &[Rule<f64>] = &[
    Rule {
        status: Critical,
        message: "Hipoxemia Grave",
        applies: |v| v < 85.0,
    },
    Rule {
        status: Warning,
        message: "Hipoxemia/Dessaturação",
        applies: |v| v < 92.0,
    },
];

/// Capillary glycemia, in mg/dL.
pub const GLYCEMIA_RULES: &[Rule<f64>] = &[
    Rule {
        status: Critical,
        message: "Hipoglicemia Severa",
        applies: |v| v < 50.0,
    },
    Rule {
        status: Critical,
        message: "Hiperglicemia Severa",
        applies: |v| v > 400.0,
    },
    Rule {
        status: Warning,
        message: "Hipoglicemia",
        applies: |v| v < 70.0,
    },
    Rule {
        status: Warning,
        message: "Hiperglicemia",
        applies: |v| v > 200.0,
    },
];

/// End-tidal CO₂, in mmHg.
pub const CO2_RULES: &[Rule<f64>] = &[Rule {
    status: Warning,
    message: "CO₂ fora da faixa normal",
    applies: |v| !(25.0..=55.0).contains(&v),
}];

/// Supplemental oxygen flow, in L/min.
pub const OXYGEN_RULES: &[Rule<f64>] = &[Rule {
    status: Warning,
    message: "Alto fluxo de O₂",
    applies: |v| v > 10.0,
}];

/// Rule table for a sign read as a single decimal number. Blood pressure
/// has its own table over [`BloodPressure`].
pub fn scalar_rules(sign: VitalSign) -> Option<&'static [Rule<f64>]> {
    match sign {
        VitalSign::BloodPressure => None,
        VitalSign::Pulse | VitalSign::HeartRate => Some(HEART_RATE_RULES),
        VitalSign::Temperature => Some(TEMPERATURE_RULES),
        VitalSign::Saturation => Some(SATURATION_RULES),
        VitalSign::Glycemia => Some(GLYCEMIA_RULES),
        VitalSign::Co2 => Some(CO2_RULES),
        VitalSign::Oxygen => Some(OXYGEN_RULES),
    }
}

/// Classify a raw reading.
///
/// Empty or unreadable values are normal with no message: an unfinished
/// field has nothing to flag.
pub fn classify(sign: VitalSign, raw: &str) -> VitalAnalysis {
    let analysis = match scalar_rules(sign) {
        None => BloodPressure::parse(raw)
            .map(|bp| Rule::first_match(BLOOD_PRESSURE_RULES, bp))
            .unwrap_or_default(),
        Some(rules) => parse::decimal(raw)
            .map(|value| Rule::first_match(rules, value))
            .unwrap_or_default(),
    };

    if analysis.is_flagged() {
        tracing::debug!(
            sign = %sign,
            value = raw,
            status = %analysis.status,
            "vital sign flagged"
        );
    }
    analysis
}

pub fn classify_reading(reading: &VitalReading) -> VitalAnalysis {
    classify(reading.sign, &reading.value)
}
