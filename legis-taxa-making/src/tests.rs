use super::*;
use legis_taxa_core::{Classification, MakingMetadata, PipelineConfig};

fn cfg() -> PipelineConfig {
    PipelineConfig::default()
}

#[test]
fn base_rate_with_no_evidence_matches_property_9() {
    let result = detect(&MakingMetadata::default(), &cfg());
    assert!((result.confidence - 0.173).abs() < 0.001);
    assert_eq!(result.tier, 0);
    assert!(result.signals.is_empty());
    assert_eq!(result.classification, Classification::NotMaking);
}

#[test]
fn commencement_detection_scenario_s4() {
    let meta = MakingMetadata {
        title_en: "Environment Act 2024 (Commencement No. 3) Order".to_string(),
        md_body_paras: Some(3),
        ..Default::default()
    };
    let result = detect(&meta, &cfg());
    assert_eq!(result.classification, Classification::NotMaking);
    assert!(result.confidence < 0.10);
    assert!(result.tier >= 1);
    assert!(result.signals.iter().any(|s| s.name == "title_commencement"));
}

#[test]
fn clean_making_law_scenario_s5() {
    let meta = MakingMetadata {
        title_en: "Workplace Health and Safety Regulations 2024".to_string(),
        md_description: "An Act to make provision for securing the health, safety and welfare \
                          of persons at work"
            .to_string(),
        md_body_paras: Some(85),
        ..Default::default()
    };
    let result = detect(&meta, &cfg());
    assert_eq!(result.classification, Classification::Making);
    assert!(result.confidence >= 0.70);
}

#[test]
fn appointed_day_also_forces_not_making() {
    let meta = MakingMetadata {
        title_en: "Health and Safety at Work Act 1974 (Appointed Day) Order".to_string(),
        md_body_paras: Some(90),
        md_description: "An Act to make provision for securing the health and safety of persons".to_string(),
        ..Default::default()
    };
    // Tier 1 forces not_making even though body_paras/description would
    // otherwise point strongly toward making.
    let result = detect(&meta, &cfg());
    assert_eq!(result.classification, Classification::NotMaking);
}

#[test]
fn low_body_high_schedule_is_a_not_making_signal() {
    let meta = MakingMetadata {
        md_body_paras: Some(2),
        md_schedule_paras: Some(60),
        ..Default::default()
    };
    let result = detect(&meta, &cfg());
    assert!(result.signals.iter().any(|s| s.name == "low_body_high_schedule"));
    assert!(result.signals.iter().any(|s| s.name == "very_low_body_paras"));
    assert_eq!(result.classification, Classification::NotMaking);
}

#[test]
fn threshold_boundary_matches_property_8() {
    let mut config = cfg();
    config.making_thresholds = (0.30, 0.70);
    let meta = MakingMetadata {
        md_description: "to amend the principal Regulations".to_string(),
        ..Default::default()
    };
    let result = detect(&meta, &config);
    if result.confidence >= 0.70 {
        assert_eq!(result.classification, Classification::Making);
    } else if result.confidence <= 0.30 {
        assert_eq!(result.classification, Classification::NotMaking);
    } else {
        assert_eq!(result.classification, Classification::Uncertain);
    }
}

#[test]
fn serialization_helper_builds_persistence_map() {
    let result = detect(&MakingMetadata::default(), &cfg());
    let value = to_parsed_law_fields(&result, "2026-07-30T00:00:00Z");
    assert_eq!(value["making_classification"], "not_making");
    assert_eq!(value["making_detection_tier"], 0);
    assert_eq!(value["making_detection_signals"]["version"], 1);
    assert_eq!(value["making_detection_signals"]["detected_at"], "2026-07-30T00:00:00Z");
    assert!(value["making_detection_signals"]["signals"].as_array().unwrap().is_empty());
}
