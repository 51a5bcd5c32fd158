use prontuario_cli::evaluate::evaluate;
use prontuario_cli::render;
use prontuario_core::models::braden::BradenTier;
use prontuario_core::models::chart::ShiftChart;
use prontuario_core::models::morse::MorseTier;
use prontuario_core::models::vitals::VitalStatus;

fn fixture() -> ShiftChart {
    ShiftChart::from_json(include_str!("fixtures/shift_chart.json")).unwrap()
}

#[test]
fn evaluates_every_section() {
    let evaluation = evaluate(&fixture());

    assert_eq!(evaluation.patient_name, "Maria Silva");
    assert_eq!(evaluation.vitals.overall, VitalStatus::Critical);
    assert_eq!(evaluation.vitals.flagged().count(), 2);
    assert_eq!(evaluation.fluid_balance.balance_total, 200.0);
    assert_eq!(evaluation.braden.total, 12);
    assert_eq!(evaluation.braden.tier, BradenTier::High);
    assert_eq!(evaluation.morse.total, 60);
    assert_eq!(evaluation.morse.tier, MorseTier::High);
}

#[test]
fn reports_scale_entries_outside_their_options() {
    let evaluation = evaluate(&fixture());
    assert_eq!(evaluation.validation.len(), 1);
    assert_eq!(evaluation.validation[0].item_id, "gait");
    assert_eq!(evaluation.validation[0].allowed, vec![0, 10, 20]);
}

#[test]
fn blank_chart_is_unremarkable() {
    let evaluation = evaluate(&ShiftChart::new("João Souza"));
    assert_eq!(evaluation.vitals.overall, VitalStatus::Normal);
    assert_eq!(evaluation.fluid_balance.balance_total, 0.0);
    assert_eq!(evaluation.braden.tier, BradenTier::NotFilled);
    assert_eq!(evaluation.morse.tier, MorseTier::Low);
    assert!(evaluation.validation.is_empty());
}

#[test]
fn json_output_uses_chart_labels() {
    let json = serde_json::to_value(evaluate(&fixture())).unwrap();
    assert_eq!(json["braden"]["tier"], "Risco Alto");
    assert_eq!(json["morse"]["tier"], "Alto Risco");
    assert_eq!(json["fluidBalance"]["balanceTotal"], 200.0);
    assert_eq!(json["vitals"]["overall"], "critical");
}

#[test]
fn text_output_can_hide_normal_vitals() {
    let evaluation = evaluate(&fixture());

    let all = render::evaluation(&evaluation, false);
    assert!(all.contains("Frequência Cardíaca 88 bpm: normal"));
    assert!(all.contains("Pressão Arterial 190/120 mmHg: critical (Crise Hipertensiva)"));
    assert!(all.contains("Braden: 12 (Risco Alto)"));
    assert!(all.contains("Morse: 60 (Alto Risco)"));

    let flagged = render::evaluation(&evaluation, true);
    assert!(!flagged.contains("Frequência Cardíaca"));
    assert!(flagged.contains("Temperatura 37,8 °C: warning (Estado Febril)"));
}

#[test]
fn notes_are_carried_into_the_output() {
    let evaluation = evaluate(&fixture());
    assert_eq!(evaluation.notes.as_deref(), Some("Paciente refere cefaleia."));

    let text = render::evaluation(&evaluation, false);
    assert!(text.ends_with("\nAnotações:\nPaciente refere cefaleia.\n"));

    let json = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(json["notes"], "Paciente refere cefaleia.");
}

#[test]
fn chart_without_notes_has_no_notes_section() {
    let evaluation = evaluate(&ShiftChart::new("João Souza"));
    assert!(!render::evaluation(&evaluation, false).contains("Anotações"));
    assert!(serde_json::to_value(&evaluation).unwrap().get("notes").is_none());
}
