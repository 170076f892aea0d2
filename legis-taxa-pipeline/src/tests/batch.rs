use super::*;
use legis_taxa_core::ActorLabel;

#[test]
fn batch_preserves_input_order() {
    let records = vec![
        Record {
            text: "The employer shall ensure safety.".to_string(),
            role: vec![ActorLabel::new("Org: Employer")],
            ..Default::default()
        },
        Record {
            text: "The Secretary of State may by regulations prescribe requirements.".to_string(),
            role_gvt: vec![ActorLabel::new("Gvt: Minister")],
            ..Default::default()
        },
        Record::new("Plain prose with nothing to classify."),
    ];
    let config = PipelineConfig::default();
    let outputs = classify_batch(records.clone(), &config);

    assert_eq!(outputs.len(), 3);
    assert_eq!(outputs[0].record.text, records[0].text);
    assert_eq!(outputs[1].record.text, records[1].text);
    assert_eq!(outputs[2].record.text, records[2].text);
    assert!(!outputs[0].record.duty_holder.is_empty());
    assert!(!outputs[1].record.power_holder.is_empty());
}

#[test]
fn empty_batch_returns_empty() {
    let outputs = classify_batch(Vec::new(), &PipelineConfig::default());
    assert!(outputs.is_empty());
}
