use super::*;

fn cfg() -> PipelineConfig {
    PipelineConfig::default()
}

#[test]
fn empty_text_returns_empty_regardless_of_duty_type() {
    assert!(classify("", Some(DutyTypeTag::Duty), &cfg()).is_empty());
}

#[test]
fn category_pattern_match_wins_over_default() {
    let text = "The employer shall carry out a risk assessment before work begins.";
    let tags = classify(text, Some(DutyTypeTag::Duty), &cfg());
    assert_eq!(tags, vec![PopimarTag::PlanningRiskImpactAssessment]);
}

#[test]
fn eligible_duty_type_defaults_to_risk_control_when_nothing_fires() {
    let text = "The employer shall keep the workplace in a satisfactory condition.";
    let tags = classify(text, Some(DutyTypeTag::Duty), &cfg());
    assert_eq!(tags, vec![PopimarTag::RiskControl]);
}

#[test]
fn ineligible_duty_type_gets_no_default() {
    let text = "This instrument comes into force on 1st January.";
    assert!(classify(text, None, &cfg()).is_empty());
}

#[test]
fn multiple_categories_accumulate_in_declaration_order() {
    let text = "The employer shall prepare a health and safety policy setting out \
                organisational arrangements, and shall keep a record of every inspection.";
    let tags = classify(text, Some(DutyTypeTag::Duty), &cfg());
    assert_eq!(
        tags,
        vec![
            PopimarTag::Policy,
            PopimarTag::Organisation,
            PopimarTag::Records,
        ]
    );
}
