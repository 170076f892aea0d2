//! The atomic output of `RoleMatcher`.

use crate::{ActorLabel, DutyTypeTag};

/// A single actor/modal/action finding.
///
/// Invariant: `clause`, if present, ends in a sentence-terminal mark
/// (`. ; ! ? ) ] "`) or the literal ellipsis `...` explicitly appended by
/// the refiner — never in a partial word (§3, §8 property 2–4).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Match {
    pub holder: ActorLabel,
    pub duty_type: DutyTypeTag,
    pub clause: Option<String>,
    pub article: Option<String>,
}

impl Match {
    pub fn new(holder: ActorLabel, duty_type: DutyTypeTag) -> Self {
        Self {
            holder,
            duty_type,
            clause: None,
            article: None,
        }
    }

    pub fn with_clause(mut self, clause: Option<String>) -> Self {
        self.clause = clause;
        self
    }

    pub fn with_article(mut self, article: Option<String>) -> Self {
        self.article = article;
        self
    }

    /// A clause is well-formed per §8 property 2: ends in one of the
    /// terminal marks, or the literal `...`.
    pub fn clause_is_well_formed(&self) -> bool {
        match &self.clause {
            None => true,
            Some(c) => {
                c.ends_with("...")
                    || c.ends_with(['.', ';', '!', '?', ')', ']', '"'])
            }
        }
    }
}
