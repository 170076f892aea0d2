//! Modal lexicon and anchor/window types shared by `ModalIndex` and `RoleMatcher`.

use std::fmt;

/// One entry of the modal lexicon (§4.2).
///
/// Multi-word modals match greedily; `MayNot` and `MayOnly` take precedence
/// over bare `May` at the same offset — callers that build an alternation
/// pattern from [`ModalKind::all_by_precedence`] get this for free, since
/// Rust's `regex` crate uses leftmost-first alternation (the first
/// alternative that matches at a given start position wins, regardless of
/// length), so ordering the longer/more-specific alternatives first is
/// sufficient to implement "longest match wins" without backtracking cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ModalKind {
    DutyOf,
    PowerTo,
    RemainsResponsible,
    IsLiable,
    MayNot,
    MayOnly,
    Shall,
    Must,
    May,
}

impl ModalKind {
    /// Canonical lowercase surface form, used both to build pattern source
    /// and to label signals/anchors for audit/debug output.
    pub fn surface(self) -> &'static str {
        match self {
            ModalKind::DutyOf => "it shall be the duty of",
            ModalKind::PowerTo => "has the power to",
            ModalKind::RemainsResponsible => "remains responsible",
            ModalKind::IsLiable => "is liable",
            ModalKind::MayNot => "may not",
            ModalKind::MayOnly => "may only",
            ModalKind::Shall => "shall",
            ModalKind::Must => "must",
            ModalKind::May => "may",
        }
    }

    /// All modal kinds, ordered so that multi-word / more-specific forms
    /// precede the bare forms they prefix (`may not`, `may only` before
    /// `may`). This is the order in which alternatives should be tried.
    pub fn all_by_precedence() -> [ModalKind; 9] {
        [
            ModalKind::DutyOf,
            ModalKind::PowerTo,
            ModalKind::RemainsResponsible,
            ModalKind::IsLiable,
            ModalKind::MayNot,
            ModalKind::MayOnly,
            ModalKind::Shall,
            ModalKind::Must,
            ModalKind::May,
        ]
    }

    /// Whether this modal is always duty-class regardless of the `RoleKind`
    /// under which it is encountered (§4.5, §9 "may not ambiguity"). An
    /// implementer must not emit a right/power match for either of these.
    pub fn is_duty_class(self) -> bool {
        matches!(self, ModalKind::MayNot | ModalKind::MayOnly)
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.surface())
    }
}

/// A single modal-verb occurrence located in `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalAnchor {
    pub kind: ModalKind,
    pub offset: usize,
    pub length: usize,
}

impl ModalAnchor {
    pub fn new(kind: ModalKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// A half-open `[start, end)` span of character (byte, for this ASCII-centric
/// corpus) offsets around a modal anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Builds the window around an anchor, clamped to `[0, len)`.
    pub fn around_anchor(anchor: &ModalAnchor, left: usize, right: usize, len: usize) -> Self {
        let start = anchor.offset.saturating_sub(left);
        let end = (anchor.end() + right).min(len);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn overlaps(&self, other: &Window) -> bool {
        self.start < other.end && other.start < self.end
    }
}
