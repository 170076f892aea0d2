use super::*;

#[test]
fn empty_text_returns_empty() {
    assert!(classify("").is_empty());
    assert!(classify_title("").is_empty());
}

#[test]
fn amendment_short_circuits_over_every_other_cue() {
    // §8 scenario S6: commencement and amendment cues both present.
    let text = "This Order comes into force on 1st April and for regulation 4 substitute \
                the following regulation.";
    assert_eq!(classify(text), vec![PurposeTag::Amendment]);
}

#[test]
fn accumulates_every_firing_category() {
    let text = "This Part applies to England and Wales. A person who fails to comply \
                commits an offence.";
    let tags = classify(text);
    assert!(tags.contains(&PurposeTag::ApplicationScope));
    assert!(tags.contains(&PurposeTag::Offence));
    assert!(!tags.contains(&PurposeTag::Amendment));
}

#[test]
fn falls_back_to_default_tag_when_nothing_fires() {
    assert_eq!(classify("Plain prose with no taxonomy cues at all."), vec![PurposeTag::default_tag()]);
}

#[test]
fn title_scope_is_narrower_than_full_classification() {
    let title = "The Health and Safety (Enforcement) Regulations may be cited as the 2024 Regulations.";
    let tags = classify_title(title);
    assert_eq!(tags, vec![PurposeTag::EnactmentCitationCommencement]);

    // Offence is not in the title-scoped set, even though it would fire
    // under full-section classification.
    let offence_title = "A person who fails to comply commits an offence.";
    assert!(classify_title(offence_title).is_empty());
}

#[test]
fn purposes_come_back_sorted_structural_first() {
    let text = "This Part applies to England. This Order is hereby revoked.";
    let tags = classify(text);
    assert_eq!(
        tags,
        vec![PurposeTag::ApplicationScope, PurposeTag::RepealRevocation]
    );
}
