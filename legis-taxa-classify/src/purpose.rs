//! PurposeClassifier (§4.7): priority-ordered, amendment-short-circuiting
//! taxonomy of a section's legislative function.

use once_cell::sync::Lazy;
use regex::Regex;

use legis_taxa_core::{sort_purposes, PurposeTag};

static AMENDMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:is hereby amended|shall be amended|is amended as follows|for .+ substitute|substitute the following|shall be substituted|is (?:hereby )?inserted|insert the following|is omitted|shall be omitted|as follows)\b",
    )
    .expect("literal alternation always compiles")
});

/// `(tag, pattern)` pairs in priority order. Amendment is handled
/// separately as a short-circuit and is not part of this table.
static CATEGORY_PATTERNS: Lazy<Vec<(PurposeTag, Regex)>> = Lazy::new(|| {
    vec![
        (
            PurposeTag::EnactmentCitationCommencement,
            Regex::new(r#"(?i)\bmay be cited as\b"#).unwrap(),
        ),
        (
            PurposeTag::InterpretationDefinition,
            Regex::new(r#"(?i)(?:"[^"]+"\s+means\b|\binterpretation\b|\bhas the meaning (?:assigned|given)\b)"#).unwrap(),
        ),
        (
            PurposeTag::ApplicationScope,
            Regex::new(r"(?i)\bthis (?:part|regulation|act|order)s? (?:applies|does not apply|applies only) to\b").unwrap(),
        ),
        (
            PurposeTag::Extent,
            Regex::new(r"(?i)\b(?:extends?|does not extend) to (?:england|wales|scotland|northern ireland)\b").unwrap(),
        ),
        (
            PurposeTag::Exemption,
            Regex::new(r"(?i)\b(?:is exempt from|shall not apply to|exemption (?:from|is granted)|may be exempted)\b").unwrap(),
        ),
        (
            PurposeTag::RepealRevocation,
            Regex::new(r"(?i)\b(?:is (?:hereby )?repealed|are (?:hereby )?repealed|is (?:hereby )?revoked|are (?:hereby )?revoked|shall cease to have effect)\b").unwrap(),
        ),
        (
            PurposeTag::TransitionalArrangement,
            Regex::new(r"(?i)\b(?:transitional provision|pending the coming into force|until the coming into force|saving provision)\b").unwrap(),
        ),
        (
            PurposeTag::ChargeFee,
            Regex::new(r"(?i)\b(?:a fee of|shall pay a fee|charges? (?:are )?payable|prescribed fee)\b").unwrap(),
        ),
        (
            PurposeTag::Offence,
            Regex::new(r"(?i)\b(?:commits an offence|guilty of an offence|is guilty of an offence)\b").unwrap(),
        ),
        (
            PurposeTag::EnforcementProsecution,
            Regex::new(r"(?i)\b(?:enforcing authority|may prosecute|prosecution (?:for|of)|enforcement notice)\b").unwrap(),
        ),
        (
            PurposeTag::DefenceAppeal,
            Regex::new(r"(?i)\b(?:it (?:shall be|is) a defence|may appeal (?:to|against)|right of appeal)\b").unwrap(),
        ),
        (
            PurposeTag::PowerConferred,
            Regex::new(r"(?i)\b(?:in exercise of the powers conferred by|power conferred by this (?:section|regulation|part))\b").unwrap(),
        ),
        (
            PurposeTag::Commencement,
            Regex::new(r"(?i)\b(?:comes? into (?:operation|force) on|commencement date|different days may be appointed)\b").unwrap(),
        ),
    ]
});

/// Title-scoped subset named in §4.7: a smaller set applies when
/// classifying a document title rather than a section body.
const TITLE_SCOPED: &[PurposeTag] = &[
    PurposeTag::RepealRevocation,
    PurposeTag::EnactmentCitationCommencement,
    PurposeTag::ApplicationScope,
    PurposeTag::TransitionalArrangement,
    PurposeTag::Extent,
];

fn accumulate(text: &str, scope: Option<&[PurposeTag]>) -> Vec<PurposeTag> {
    let mut hits: Vec<PurposeTag> = CATEGORY_PATTERNS
        .iter()
        .filter(|(tag, re)| scope.map_or(true, |s| s.contains(tag)) && re.is_match(text))
        .map(|(tag, _)| *tag)
        .collect();
    hits.dedup();
    sort_purposes(hits)
}

/// Full-section classification (§4.7): amendment short-circuits to
/// `["Amendment"]`; otherwise every firing category accumulates, falling
/// back to the default tag when nothing fires.
pub fn classify(text: &str) -> Vec<PurposeTag> {
    if text.is_empty() {
        return Vec::new();
    }
    if AMENDMENT.is_match(text) {
        tracing::trace!("amendment cue fired, short-circuiting purpose classification");
        return vec![PurposeTag::Amendment];
    }
    let hits = accumulate(text, None);
    if hits.is_empty() {
        vec![PurposeTag::default_tag()]
    } else {
        hits
    }
}

/// Title-scoped classification: no default-tag fallback — an empty
/// result means no title-scoped pattern matched.
pub fn classify_title(title: &str) -> Vec<PurposeTag> {
    if title.is_empty() {
        return Vec::new();
    }
    if AMENDMENT.is_match(title) {
        return vec![PurposeTag::Amendment];
    }
    accumulate(title, Some(TITLE_SCOPED))
}

#[cfg(test)]
#[path = "tests/purpose.rs"]
mod tests;
