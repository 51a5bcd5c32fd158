use prontuario_core::models::braden::{BradenAssessment, BradenItem, BradenTier};
use prontuario_scales::scales::braden::{self, Braden};
use prontuario_scales::scoring::ScoreEntry;
use prontuario_scales::RiskScale;

fn uniform(value: u8) -> BradenAssessment {
    let mut assessment = BradenAssessment::default();
    for item in BradenItem::ALL {
        assessment.set(item, value);
    }
    assessment
}

#[test]
fn blank_assessment_is_not_filled() {
    let score = braden::score(&BradenAssessment::default());
    assert_eq!(score.total, 0);
    assert_eq!(score.tier, BradenTier::NotFilled);
    assert_eq!(score.tier.label(), "Não preenchido");
}

#[test]
fn all_minimum_is_very_high_risk() {
    let score = braden::score(&uniform(1));
    assert_eq!(score.total, 6);
    assert_eq!(score.tier, BradenTier::VeryHigh);
    assert_eq!(score.tier.label(), "Risco Muito Alto");
}

#[test]
fn all_twos_is_high_risk() {
    let score = braden::score(&uniform(2));
    assert_eq!(score.total, 12);
    assert_eq!(score.tier.label(), "Risco Alto");
}

#[test]
fn tier_boundaries() {
    assert_eq!(braden::tier(23, true), BradenTier::NoRisk);
    assert_eq!(braden::tier(19, true), BradenTier::NoRisk);
    assert_eq!(braden::tier(18, true), BradenTier::Mild);
    assert_eq!(braden::tier(15, true), BradenTier::Mild);
    assert_eq!(braden::tier(14, true), BradenTier::Moderate);
    assert_eq!(braden::tier(13, true), BradenTier::Moderate);
    assert_eq!(braden::tier(12, true), BradenTier::High);
    assert_eq!(braden::tier(10, true), BradenTier::High);
    assert_eq!(braden::tier(9, true), BradenTier::VeryHigh);
    assert_eq!(braden::tier(1, true), BradenTier::VeryHigh);
    assert_eq!(braden::tier(0, true), BradenTier::NotFilled);
    assert_eq!(braden::tier(15, false), BradenTier::NotFilled);
}

#[test]
fn partially_filled_assessment_scores_what_is_set() {
    let mut assessment = BradenAssessment::default();
    assessment.set(BradenItem::Sensory, 3);
    assessment.set(BradenItem::Moisture, 4);
    let score = braden::score(&assessment);
    assert_eq!(score.total, 7);
    assert_eq!(score.tier, BradenTier::VeryHigh);
}

#[test]
fn assess_from_entries() {
    let entries = vec![
        ScoreEntry::new("sensory", 4),
        ScoreEntry::new("moisture", 3),
        ScoreEntry::new("activity", 3),
        ScoreEntry::new("mobility", 3),
        ScoreEntry::new("nutrition", 3),
        ScoreEntry::new("friction", 3),
    ];
    let result = Braden.assess(&entries).unwrap();
    assert_eq!(result.scale_id, "braden");
    assert_eq!(result.total, 19);
    assert_eq!(result.tier, "Sem Risco");
    assert!(result.filled);
}

#[test]
fn assess_without_entries_is_not_filled() {
    let result = Braden.assess(&[]).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.tier, "Não preenchido");
    assert!(!result.filled);
}

#[test]
fn unknown_item_is_rejected() {
    let err = Braden.assess(&[ScoreEntry::new("history", 25)]).unwrap_err();
    assert!(err.to_string().contains("unknown item 'history'"));
}

#[test]
fn oversized_value_is_rejected() {
    assert!(Braden.assess(&[ScoreEntry::new("sensory", 1000)]).is_err());
}

#[test]
fn validation_flags_out_of_range_options() {
    let errors = Braden.validate_entries(&[
        ScoreEntry::new("sensory", 4),
        ScoreEntry::new("friction", 4),
        ScoreEntry::new("nutrition", 0),
    ]);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].item_id, "friction");
    assert_eq!(errors[0].allowed, vec![1, 2, 3]);
    assert_eq!(errors[1].item_id, "nutrition");
}

#[test]
fn entries_cover_only_set_items() {
    let mut assessment = BradenAssessment::default();
    assessment.set(BradenItem::Mobility, 2);
    assert_eq!(
        braden::entries(&assessment),
        vec![ScoreEntry::new("mobility", 2)]
    );
}

#[test]
fn blank_assessment_deserializes_from_empty_object() {
    let assessment: BradenAssessment = serde_json::from_str("{}").unwrap();
    assert!(!assessment.is_filled());
    let tier = serde_json::to_value(braden::score(&assessment).tier).unwrap();
    assert_eq!(tier, "Não preenchido");
}
