use serde::{Deserialize, Serialize};
use ts_rs::TS;

use prontuario_core::models::vitals::{VitalAnalysis, VitalReading, VitalStatus};

use crate::rules::classify_reading;

/// A reading together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Finding {
    pub reading: VitalReading,
    pub analysis: VitalAnalysis,
}

/// Classification of every vital charted in a shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VitalsSummary {
    /// Worst status among the findings.
    pub overall: VitalStatus,
    /// One entry per reading, in charting order.
    pub findings: Vec<Finding>,
}

impl VitalsSummary {
    pub fn flagged(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.analysis.is_flagged())
    }

    /// Free text for the nursing report: one line per flagged reading.
    pub fn to_report_text(&self) -> String {
        let lines: Vec<String> = self
            .flagged()
            .map(|finding| {
                let sign = finding.reading.sign;
                format!(
                    "{}: {} {} - {}",
                    sign.label(),
                    finding.reading.value.trim(),
                    sign.unit(),
                    finding.analysis.message.as_deref().unwrap_or_default(),
                )
            })
            .collect();

        if lines.is_empty() {
            "Sinais vitais sem alterações.".to_string()
        } else {
            lines.join("\n")
        }
    }
}

pub fn summarize(readings: &[VitalReading]) -> VitalsSummary {
    let findings: Vec<Finding> = readings
        .iter()
        .map(|reading| Finding {
            reading: reading.clone(),
            analysis: classify_reading(reading),
        })
        .collect();

    let overall = findings
        .iter()
        .map(|f| f.analysis.status)
        .max()
        .unwrap_or_default();

    VitalsSummary { overall, findings }
}
