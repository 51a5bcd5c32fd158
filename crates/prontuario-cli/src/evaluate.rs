use serde::Serialize;
use uuid::Uuid;

use prontuario_core::models::braden::BradenScore;
use prontuario_core::models::chart::ShiftChart;
use prontuario_core::models::fluid_balance::FluidBalanceRecord;
use prontuario_core::models::morse::MorseScore;
use prontuario_scales::RiskScale;
use prontuario_scales::scales::{braden, morse};
use prontuario_scales::scoring::ValidationError;
use prontuario_vitals::{VitalsSummary, summarize};

/// Everything derived from one shift chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEvaluation {
    pub chart_id: Uuid,
    pub patient_name: String,
    pub recorded_at: jiff::Timestamp,
    pub vitals: VitalsSummary,
    pub fluid_balance: FluidBalanceRecord,
    pub braden: BradenScore,
    pub morse: MorseScore,
    /// Scale entries that are not among their item's options.
    pub validation: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

pub fn evaluate(chart: &ShiftChart) -> ChartEvaluation {
    let mut validation = braden::Braden.validate_entries(&braden::entries(&chart.braden));
    validation.extend(morse::Morse.validate_entries(&morse::entries(&chart.morse)));

    let evaluation = ChartEvaluation {
        chart_id: chart.id,
        patient_name: chart.patient_name.clone(),
        recorded_at: chart.recorded_at,
        vitals: summarize(&chart.vitals),
        fluid_balance: chart.fluid_balance.clone().recompute(),
        braden: braden::score(&chart.braden),
        morse: morse::score(&chart.morse),
        validation,
        notes: chart.notes.clone(),
    };

    tracing::info!(
        chart_id = %evaluation.chart_id,
        vitals = %evaluation.vitals.overall,
        balance_ml = evaluation.fluid_balance.balance_total,
        braden = %evaluation.braden.tier,
        morse = %evaluation.morse.tier,
        "chart evaluated"
    );
    evaluation
}
