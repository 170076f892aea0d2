//! RoleMatcher (§4.3): for a role kind, scan windows around modal anchors,
//! emit structured actor/modal/action matches.

use std::collections::HashSet;

use regex::Regex;

use legis_taxa_actors::custom_actor_library;
use legis_taxa_core::{ActorLabel, DutyTypeTag, Match, PipelineConfig, RoleKind, Window};
use legis_taxa_modal::ModalIndex;

use crate::clause_refiner;

/// A single attempted clause-pattern compilation, appended to the
/// caller-supplied accumulator for metrics (§4.3, §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexAttempt {
    pub label: ActorLabel,
    pub source: String,
    pub compiled: bool,
    pub error: Option<String>,
}

/// `(holders, duty_types, matches, regexes)` from §4.3's public contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMatcherOutput {
    pub holders: Vec<ActorLabel>,
    pub duty_types: Vec<DutyTypeTag>,
    pub matches: Vec<Match>,
}

fn modal_kinds_for(kind: RoleKind) -> &'static [legis_taxa_core::ModalKind] {
    use legis_taxa_core::ModalKind::*;
    match kind {
        // "may not"/"may only" are always duty-class (§4.5, §9): Duty and
        // Responsibility carry them, Right and Power never do, so their
        // anchor is never labeled MayNot/MayOnly. Right/Power's bare `May`
        // can still match the start of either phrase as a substring —
        // `may_is_negated` below is what actually rules that out.
        RoleKind::Duty => &[DutyOf, Shall, Must, MayNot, MayOnly],
        RoleKind::Right => &[May],
        RoleKind::Responsibility => &[RemainsResponsible, IsLiable, Shall, Must, MayNot, MayOnly],
        RoleKind::Power => &[May, PowerTo],
    }
}

fn word_pattern(surface: &str) -> String {
    surface
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn modal_alternation_source(kind: RoleKind) -> String {
    modal_kinds_for(kind)
        .iter()
        .map(|k| word_pattern(k.surface()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Composes the RoleKind-specific clause pattern for one actor: actor ·
/// (bounded intervening prose) · modal · (bounded captured action). The
/// modal itself is a named group so a match can be checked for "may"
/// immediately followed by "not"/"only" before it's accepted (see
/// `may_is_negated`) — the `regex` crate has no negative lookahead to rule
/// those out inside the pattern itself.
fn clause_pattern_source(actor_fragment: &str, kind: RoleKind) -> String {
    format!(
        r"{actor}(?:[^.;!?]{{0,120}}?)\b(?P<modal>{modal})\b(?P<action>[^.;!?]{{0,200}})?",
        actor = actor_fragment,
        modal = modal_alternation_source(kind),
    )
}

/// Whether the bare "may" ending at `modal_end` in `window_text` is actually
/// the start of "may not"/"may only" (§4.5/§9 "may not ambiguity"). Those
/// are always duty-class (`ModalKind::is_duty_class`), so a Right/Power
/// clause pattern — whose alternation only contains bare `May` — must not
/// accept a "may" that's really the prefix of one of the negating forms.
fn may_is_negated(window_text: &str, modal_end: usize) -> bool {
    let tail = window_text[modal_end..].trim_start();
    ["not", "only"].iter().any(|word| {
        tail.strip_prefix(word)
            .map(|rest| !rest.starts_with(|c: char| c.is_alphanumeric()))
            .unwrap_or(false)
    })
}

/// Scans `text` for holders of `kind` among `actor_labels`, appending every
/// attempted pattern to `accum` for metrics. Never panics or returns an
/// error: a pattern that fails to compile is logged and skipped (§7).
pub fn find_role_holders(
    kind: RoleKind,
    actor_labels: &[ActorLabel],
    text: &str,
    accum: &mut Vec<RegexAttempt>,
    config: &PipelineConfig,
) -> RoleMatcherOutput {
    if text.is_empty() || actor_labels.is_empty() {
        return RoleMatcherOutput::default();
    }

    let actor_patterns = custom_actor_library(actor_labels, kind);
    let windows = search_windows(text, config);

    let mut holders: Vec<ActorLabel> = Vec::new();
    let mut matches: Vec<Match> = Vec::new();

    for actor_pattern in &actor_patterns {
        let source = clause_pattern_source(&actor_pattern.fragment, kind);
        let compiled = Regex::new(&source);
        match compiled {
            Err(e) => {
                tracing::warn!(
                    label = %actor_pattern.label,
                    error = %e,
                    "clause pattern failed to compile, skipping"
                );
                accum.push(RegexAttempt {
                    label: actor_pattern.label.clone(),
                    source,
                    compiled: false,
                    error: Some(e.to_string()),
                });
                continue;
            }
            Ok(re) => {
                accum.push(RegexAttempt {
                    label: actor_pattern.label.clone(),
                    source,
                    compiled: true,
                    error: None,
                });

                for window in &windows {
                    let Some(window_text) = text.get(window.start..window.end) else {
                        continue;
                    };
                    for caps in re.captures_iter(window_text) {
                        if let Some(modal) = caps.name("modal") {
                            if modal.as_str() == "may" && may_is_negated(window_text, modal.end())
                            {
                                continue;
                            }
                        }
                        let raw = caps.get(0).unwrap().as_str();
                        let clause =
                            clause_refiner::refine(Some(raw), kind, Some(window_text), config);
                        matches.push(
                            Match::new(actor_pattern.label.clone(), kind.tag())
                                .with_clause(clause),
                        );
                        if !holders.contains(&actor_pattern.label) {
                            holders.push(actor_pattern.label.clone());
                        }
                    }
                }
            }
        }
    }

    // Step 7: dedup by (holder, clause), preserving text order of first
    // occurrence.
    let mut seen = HashSet::new();
    matches.retain(|m| seen.insert((m.holder.clone(), m.clause.clone())));

    let duty_types = if matches.is_empty() {
        Vec::new()
    } else {
        vec![kind.tag()]
    };

    RoleMatcherOutput {
        holders,
        duty_types,
        matches,
    }
}

/// §4.3 step 2: windowed scan above `window_threshold`, else one full-text
/// window.
fn search_windows(text: &str, config: &PipelineConfig) -> Vec<Window> {
    if text.len() > config.window_threshold {
        let index = ModalIndex::build(text);
        let mut windows = index.windows(120, 240, text.len());
        if windows.is_empty() {
            // No modal anchors at all in an over-threshold text: nothing to
            // search, matching §4.3's "actors outside every window are
            // ignored for this record."
            windows = Vec::new();
        }
        windows
    } else {
        vec![Window::new(0, text.len())]
    }
}

#[cfg(test)]
#[path = "tests/role_matcher.rs"]
mod tests;
