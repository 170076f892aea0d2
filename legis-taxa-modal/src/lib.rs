//! ModalIndex (§4.2): locates modal-verb anchor positions in text.
//!
//! The modal lexicon is `shall | must | may not | may only | may |
//! is liable | remains responsible | it shall be the duty of | has the
//! power to`. Multi-word modals match greedily; `may not` and `may only`
//! take precedence over bare `may` at the same offset. Anchors emit in text
//! order, restartable and deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

use legis_taxa_core::{ModalAnchor, ModalKind, Window};

fn word_pattern(surface: &str) -> String {
    // Tolerate runs of whitespace between words of a multi-word modal, so
    // minor formatting variance in scraped text (double spaces, line
    // wraps normalized to single spaces upstream) doesn't break the match.
    surface
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Combined alternation, ordered by `ModalKind::all_by_precedence` so that
/// the regex crate's leftmost-first alternation semantics pick the longer,
/// more specific modal when two candidates start at the same offset.
static MODAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alts: Vec<String> = ModalKind::all_by_precedence()
        .iter()
        .map(|k| word_pattern(k.surface()))
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alts.join("|")))
        .expect("modal lexicon pattern is a literal alternation and always compiles")
});

fn normalize_matched(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

fn kind_for_matched_text(matched: &str) -> ModalKind {
    let normalized = normalize_matched(matched);
    ModalKind::all_by_precedence()
        .into_iter()
        .find(|k| k.surface() == normalized)
        .unwrap_or(ModalKind::May)
}

/// An index of every modal anchor in a piece of text, built once and
/// queried for search windows.
#[derive(Debug, Clone, Default)]
pub struct ModalIndex {
    anchors: Vec<ModalAnchor>,
}

impl ModalIndex {
    /// Builds the index. Matches are non-overlapping and emitted in text
    /// order, per the ordering rule in §4.2.
    pub fn build(text: &str) -> Self {
        let anchors = MODAL_PATTERN
            .find_iter(text)
            .map(|m| {
                let kind = kind_for_matched_text(m.as_str());
                ModalAnchor::new(kind, m.start(), m.len())
            })
            .collect();
        Self { anchors }
    }

    pub fn anchors(&self) -> &[ModalAnchor] {
        &self.anchors
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Derives the set of search windows (§4.3 step 2): `[max(0,
    /// offset-left), min(len, offset+right))` per anchor.
    pub fn windows(&self, left: usize, right: usize, len: usize) -> Vec<Window> {
        self.anchors
            .iter()
            .map(|a| Window::around_anchor(a, left, right, len))
            .collect()
    }
}
