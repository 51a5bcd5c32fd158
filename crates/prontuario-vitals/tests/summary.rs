use prontuario_core::models::vitals::{VitalReading, VitalSign, VitalStatus};
use prontuario_vitals::summarize;

#[test]
fn empty_chart_is_normal() {
    let summary = summarize(&[]);
    assert_eq!(summary.overall, VitalStatus::Normal);
    assert!(summary.findings.is_empty());
    assert_eq!(summary.to_report_text(), "Sinais vitais sem alterações.");
}

#[test]
fn overall_is_worst_finding() {
    let summary = summarize(&[
        VitalReading::new(VitalSign::Temperature, "36,5"),
        VitalReading::new(VitalSign::Pulse, "110"),
        VitalReading::new(VitalSign::Saturation, "80"),
    ]);
    assert_eq!(summary.overall, VitalStatus::Critical);
    assert_eq!(summary.findings.len(), 3);
    assert_eq!(summary.flagged().count(), 2);
}

#[test]
fn report_text_lists_flagged_readings_in_order() {
    let summary = summarize(&[
        VitalReading::new(VitalSign::BloodPressure, "190/120"),
        VitalReading::new(VitalSign::Temperature, "36,5"),
        VitalReading::new(VitalSign::Temperature, " 37,9 "),
    ]);
    assert_eq!(
        summary.to_report_text(),
        "Pressão Arterial: 190/120 mmHg - Crise Hipertensiva\n\
         Temperatura: 37,9 °C - Estado Febril"
    );
}

#[test]
fn summary_serializes_status_in_lowercase() {
    let summary = summarize(&[VitalReading::new(VitalSign::Oxygen, "12")]);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["overall"], "warning");
    assert_eq!(json["findings"][0]["reading"]["sign"], "oxygen");
    assert_eq!(json["findings"][0]["analysis"]["message"], "Alto fluxo de O₂");
}
