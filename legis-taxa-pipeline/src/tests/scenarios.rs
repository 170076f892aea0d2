//! End-to-end scenarios S1-S7.

use legis_taxa_core::{ActorLabel, DutyTypeTag, MakingMetadata, PipelineConfig, PurposeTag, Record};

use crate::pipeline::process_record;

fn cfg() -> PipelineConfig {
    PipelineConfig::default()
}

#[test]
fn s1_employer_duty() {
    let record = Record {
        text: "The employer shall ensure the health and safety of employees.".to_string(),
        role: vec![ActorLabel::new("Org: Employer"), ActorLabel::new("Ind: Employee")],
        ..Default::default()
    };
    let output = process_record(record, &cfg());
    assert!(output.record.duty_type.contains(&DutyTypeTag::Duty));
    assert!(output.record.duty_holder.contains(&ActorLabel::new("Org: Employer")));
    assert!(output.record.popimar.contains(&legis_taxa_core::PopimarTag::RiskControl));
}

#[test]
fn s2_ministerial_power() {
    let record = Record {
        text: "The Secretary of State may by regulations prescribe requirements.".to_string(),
        role_gvt: vec![ActorLabel::new("Gvt: Minister")],
        ..Default::default()
    };
    let output = process_record(record, &cfg());
    assert!(output.record.duty_type.contains(&DutyTypeTag::Power));
    assert!(output.record.power_holder.contains(&ActorLabel::new("Gvt: Minister")));
}

#[test]
fn s3_clause_hygiene() {
    let raw = "The planning authority must give notice of the appeal to each person on \
               whom the hazardous substances contravention notice wa";
    let clause = legis_taxa_clauses::clause_refiner::refine(
        Some(raw),
        legis_taxa_core::RoleKind::Responsibility,
        None,
        &cfg(),
    )
    .unwrap();
    assert!(!clause.ends_with("wa"));
    assert!(clause.ends_with("..."));
}

#[test]
fn s4_commencement_detection() {
    let meta = MakingMetadata {
        title_en: "Environment Act 2024 (Commencement No. 3) Order".to_string(),
        md_body_paras: Some(3),
        ..Default::default()
    };
    let result = legis_taxa_making::detect(&meta, &cfg());
    assert_eq!(result.classification, legis_taxa_core::Classification::NotMaking);
    assert!(result.confidence < 0.10);
    assert!(result.tier >= 1);
    assert!(result.signals.iter().any(|s| s.name == "title_commencement"));
}

#[test]
fn s5_clean_making_law() {
    let meta = MakingMetadata {
        title_en: "Workplace Health and Safety Regulations 2024".to_string(),
        md_description:
            "An Act to make provision for securing the health, safety and welfare of persons at work"
                .to_string(),
        md_body_paras: Some(85),
        ..Default::default()
    };
    let result = legis_taxa_making::detect(&meta, &cfg());
    assert_eq!(result.classification, legis_taxa_core::Classification::Making);
    assert!(result.confidence >= 0.70);
}

#[test]
fn s6_purpose_precedence() {
    let text = "This Order comes into force on 1st April and for regulation 4 substitute \
                the following regulation.";
    assert_eq!(
        legis_taxa_classify::classify_purpose(text),
        vec![PurposeTag::Amendment]
    );
}

#[test]
fn s7_amendment_suppresses_holders() {
    let record = Record {
        text: "The following amendments are made to the Health and Safety Act 1974.".to_string(),
        role: vec![ActorLabel::new("Org: Employer")],
        ..Default::default()
    };
    let output = process_record(record, &cfg());
    assert!(output.record.duty_type.is_empty());
    assert!(output.record.has_no_holders());
    assert!(output.record.purpose.contains(&PurposeTag::Amendment));
}
