//! ActorLib (§4.1): the static actor taxonomy and the regex fragments that
//! locate each actor's surface forms in statutory prose.

mod compiled;
mod dictionary;

use legis_taxa_core::{ActorLabel, RoleKind};

pub use compiled::{CompiledActor, COMPILED_ACTORS};
pub use dictionary::{ActorEntry, ACTOR_DICTIONARY};

/// `(ActorLabel, regex_fragment)` — resolved, compile-ready actor pattern
/// source, as named in §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPattern {
    pub label: ActorLabel,
    pub fragment: String,
}

fn lookup(label: &ActorLabel) -> Option<&'static CompiledActor> {
    COMPILED_ACTORS.iter().find(|a| &a.label == label)
}

/// Resolves requested labels against the dictionary, returning
/// compiled-regex-ready fragments in a stable (dictionary) order.
///
/// Labels outside the `kind`'s actor universe (e.g. a `Gvt:` label
/// requested for `RoleKind::Duty`) or outside the dictionary entirely are
/// skipped with a `tracing::warn!` — this never fails (§7).
pub fn custom_actor_library(labels: &[ActorLabel], kind: RoleKind) -> Vec<ActorPattern> {
    let mut out = Vec::new();
    for compiled in COMPILED_ACTORS.iter() {
        if !labels.contains(&compiled.label) {
            continue;
        }
        if compiled.label.is_governed() != kind.scans_governed_actors() {
            tracing::warn!(
                label = %compiled.label,
                kind = ?kind,
                "actor label outside this role kind's actor universe, skipping"
            );
            continue;
        }
        out.push(ActorPattern {
            label: compiled.label.clone(),
            fragment: compiled.fragment_source.clone(),
        });
    }
    for label in labels {
        if lookup(label).is_none() {
            tracing::warn!(%label, "actor label not found in dictionary, skipping");
        }
    }
    out
}

/// Scans `text` against every governed-actor pattern, returning labels
/// whose pattern fires at least once (after blacklist filtering).
pub fn governed_actors_in_text(text: &str) -> Vec<ActorLabel> {
    scan_universe(text, true)
}

/// Scans `text` against every government-actor pattern.
pub fn government_actors_in_text(text: &str) -> Vec<ActorLabel> {
    scan_universe(text, false)
}

fn scan_universe(text: &str, governed: bool) -> Vec<ActorLabel> {
    if text.is_empty() {
        return Vec::new();
    }
    COMPILED_ACTORS
        .iter()
        .filter(|a| a.label.is_governed() == governed)
        .filter(|a| !a.find_unsuppressed(text).is_empty())
        .map(|a| a.label.clone())
        .collect()
}

/// Result of scanning text for both actor universes at once, matching the
/// `{actors: [...], actors_gvt: [...]}` contract for nil/missing text (§4.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorScan {
    pub actors: Vec<ActorLabel>,
    pub actors_gvt: Vec<ActorLabel>,
}

/// Scans optional text for both actor universes. `None` or empty text
/// yields `{actors: [], actors_gvt: []}`.
pub fn scan_actors(text: Option<&str>) -> ActorScan {
    match text {
        None => ActorScan::default(),
        Some(t) if t.is_empty() => ActorScan::default(),
        Some(t) => ActorScan {
            actors: governed_actors_in_text(t),
            actors_gvt: government_actors_in_text(t),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_returns_empty() {
        assert!(governed_actors_in_text("").is_empty());
        assert!(government_actors_in_text("").is_empty());
    }

    #[test]
    fn scan_actors_none_is_empty() {
        let scan = scan_actors(None);
        assert!(scan.actors.is_empty());
        assert!(scan.actors_gvt.is_empty());
    }

    #[test]
    fn governed_and_government_actors_are_disjoint_universes() {
        let text = "The employer shall ensure the health and safety of employees. \
                    The Secretary of State may by regulations prescribe requirements.";
        let governed = governed_actors_in_text(text);
        let government = government_actors_in_text(text);
        assert!(governed.contains(&ActorLabel::new("Org: Employer")));
        assert!(governed.contains(&ActorLabel::new("Ind: Employee")));
        assert!(government.contains(&ActorLabel::new("Gvt: Minister")));
        for label in &governed {
            assert!(label.is_governed());
        }
        for label in &government {
            assert!(label.is_government());
        }
    }

    #[test]
    fn custom_actor_library_skips_wrong_universe() {
        let labels = vec![ActorLabel::new("Gvt: Minister"), ActorLabel::new("Org: Employer")];
        let patterns = custom_actor_library(&labels, RoleKind::Duty);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].label, ActorLabel::new("Org: Employer"));
    }

    #[test]
    fn custom_actor_library_stable_order_matches_dictionary() {
        let labels = vec![
            ActorLabel::new("Ind: Employee"),
            ActorLabel::new("Org: Employer"),
        ];
        let patterns = custom_actor_library(&labels, RoleKind::Duty);
        // Dictionary declares "Org: Employer" before "Ind: Employee".
        assert_eq!(patterns[0].label, ActorLabel::new("Org: Employer"));
        assert_eq!(patterns[1].label, ActorLabel::new("Ind: Employee"));
    }
}
