use prontuario_scales::error::ScaleError;
use prontuario_scales::scoring::ScoreEntry;
use prontuario_scales::{all_scales, get_scale};

#[test]
fn both_scales_are_registered() {
    let ids: Vec<String> = all_scales().iter().map(|s| s.id().to_string()).collect();
    assert_eq!(ids, vec!["braden", "morse"]);
}

#[test]
fn unknown_scale_is_an_error() {
    assert!(matches!(get_scale("glasgow"), Err(ScaleError::UnknownScale(id)) if id == "glasgow"));
}

#[test]
fn every_scale_has_six_items_with_options() {
    for scale in all_scales() {
        assert_eq!(scale.items().len(), 6, "{}", scale.id());
        for item in scale.items() {
            assert!(!item.options.is_empty(), "{}", item.id);
        }
    }
}

#[test]
fn morse_items_include_zero() {
    let morse = get_scale("morse").unwrap();
    for item in morse.items() {
        assert!(item.allows(0), "{}", item.id);
    }
}

#[test]
fn structured_input_lists_entries_and_total() {
    let braden = get_scale("braden").unwrap();
    let text = braden.to_structured_input(&[
        ScoreEntry::new("sensory", 2),
        ScoreEntry::new("friction", 1),
    ]);
    assert!(text.starts_with("## Escala de Braden\n\n"));
    assert!(text.contains("- Percepção Sensorial: 2 (Muito limitado)\n"));
    assert!(text.contains("- Fricção e Cisalhamento: 1 (Problema)\n"));
    assert!(!text.contains("Umidade"));
    assert!(text.ends_with("Total: 3 - Risco Muito Alto\n"));
}
