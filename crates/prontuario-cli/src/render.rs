//! Plain-text rendering for terminal output.

use prontuario_core::models::braden::BradenScore;
use prontuario_core::models::fluid_balance::{FluidBalanceRecord, FluidField};
use prontuario_core::models::morse::MorseScore;
use prontuario_core::models::vitals::{VitalAnalysis, VitalSign};
use prontuario_scales::RiskScale;
use prontuario_vitals::VitalsSummary;

use crate::evaluate::ChartEvaluation;

pub fn analysis(sign: VitalSign, raw: &str, analysis: &VitalAnalysis) -> String {
    match &analysis.message {
        Some(message) => format!(
            "{} {} {}: {} ({message})",
            sign.label(),
            raw.trim(),
            sign.unit(),
            analysis.status
        ),
        None => format!("{} {} {}: {}", sign.label(), raw.trim(), sign.unit(), analysis.status),
    }
}

pub fn balance(record: &FluidBalanceRecord) -> String {
    let mut out = String::new();
    for field in FluidField::ALL {
        out.push_str(&format!("{:<18}{:>10} mL\n", field.as_str(), record.volume(field)));
    }
    out.push_str(&format!(
        "{:<18}{:>10} mL\n{:<18}{:>10} mL\n{:<18}{:>10} mL\n",
        "intake",
        record.intake_total(),
        "output",
        record.output_total(),
        "balance",
        record.balance_total
    ));
    out
}

pub fn braden(score: &BradenScore) -> String {
    format!("Braden: {} ({})", score.total, score.tier)
}

pub fn morse(score: &MorseScore) -> String {
    format!("Morse: {} ({})", score.total, score.tier)
}

pub fn vitals(summary: &VitalsSummary, flagged_only: bool) -> String {
    let mut out = format!("Sinais vitais: {}\n", summary.overall);
    for finding in &summary.findings {
        if flagged_only && !finding.analysis.is_flagged() {
            continue;
        }
        out.push_str("  ");
        out.push_str(&analysis(
            finding.reading.sign,
            &finding.reading.value,
            &finding.analysis,
        ));
        out.push('\n');
    }
    out
}

pub fn evaluation(evaluation: &ChartEvaluation, flagged_only: bool) -> String {
    let mut out = format!(
        "{} ({})\n\n",
        evaluation.patient_name, evaluation.recorded_at
    );
    out.push_str(&vitals(&evaluation.vitals, flagged_only));
    out.push_str("\nBalanço hídrico:\n");
    out.push_str(&balance(&evaluation.fluid_balance));
    out.push('\n');
    out.push_str(&braden(&evaluation.braden));
    out.push('\n');
    out.push_str(&morse(&evaluation.morse));
    out.push('\n');
    for error in &evaluation.validation {
        out.push_str(&format!("! {error}\n"));
    }
    if let Some(notes) = evaluation.notes.as_deref().map(str::trim)
        && !notes.is_empty()
    {
        out.push_str("\nAnotações:\n");
        out.push_str(notes);
        out.push('\n');
    }
    out
}

pub fn scales(scales: &[Box<dyn RiskScale>]) -> String {
    let mut out = String::new();
    for scale in scales {
        out.push_str(&format!("{} [{}]\n", scale.name(), scale.id()));
        for item in scale.items() {
            out.push_str(&format!("  {} ({})\n", item.name, item.id));
            for option in &item.options {
                out.push_str(&format!("    {:>2}  {}\n", option.points, option.label));
            }
        }
    }
    out
}
