use prontuario_core::models::fluid_balance::{FluidBalanceRecord, FluidField};

fn record(fields: &[(FluidField, &str)]) -> FluidBalanceRecord {
    let mut record = FluidBalanceRecord::default();
    for (field, value) in fields {
        record.set_field(*field, *value);
    }
    record
}

#[test]
fn blank_sheet_balances_to_zero() {
    let record = FluidBalanceRecord::default().recompute();
    assert_eq!(record.balance_total, 0.0);
}

#[test]
fn intake_minus_output() {
    let record = record(&[
        (FluidField::IntakeOral, "500"),
        (FluidField::IntakeParenteral, "300"),
        (FluidField::OutputUrine, "600"),
    ]);
    assert_eq!(record.intake_total(), 800.0);
    assert_eq!(record.output_total(), 600.0);
    assert_eq!(record.balance_total, 200.0);
}

#[test]
fn negative_balance_is_kept() {
    let record = record(&[
        (FluidField::IntakeOral, "250"),
        (FluidField::OutputUrine, "900"),
        (FluidField::OutputEmesis, "100"),
        (FluidField::OutputDrains, "50,5"),
    ]);
    assert_eq!(record.balance_total, -800.5);
}

#[test]
fn unreadable_fields_count_as_zero() {
    let record = record(&[
        (FluidField::IntakeOral, "abc"),
        (FluidField::IntakeOther, "150"),
        (FluidField::OutputUrine, ""),
    ]);
    assert_eq!(record.balance_total, 150.0);
}

#[test]
fn recompute_ignores_stale_total_and_is_idempotent() {
    let record = FluidBalanceRecord {
        intake_oral: "1000".to_string(),
        output_urine: "400".to_string(),
        balance_total: 12345.0,
        ..Default::default()
    };
    let once = record.recompute();
    let twice = once.clone().recompute();
    assert_eq!(once.balance_total, 600.0);
    assert_eq!(twice.balance_total, once.balance_total);
}

#[test]
fn editing_a_field_replaces_its_contribution() {
    let mut record = record(&[(FluidField::IntakeOral, "500")]);
    record.set_field(FluidField::IntakeOral, "200");
    assert_eq!(record.balance_total, 200.0);
    assert_eq!(record.field(FluidField::IntakeOral), "200");
}

#[test]
fn field_names_parse_from_wire_tags() {
    assert_eq!(
        "outputDrains".parse::<FluidField>().unwrap(),
        FluidField::OutputDrains
    );
    assert!("drains".parse::<FluidField>().is_err());
}

#[test]
fn serializes_with_camel_case_fields() {
    let record = record(&[(FluidField::IntakeOral, "500")]);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["intakeOral"], "500");
    assert_eq!(json["balanceTotal"], 500.0);
}

#[test]
fn exponent_volumes_are_read_in_full() {
    let record = record(&[
        (FluidField::IntakeParenteral, "1e3"),
        (FluidField::OutputUrine, "2.5e2"),
    ]);
    assert_eq!(record.balance_total, 750.0);
}
