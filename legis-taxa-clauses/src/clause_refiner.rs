//! ClauseRefiner (§4.4): turns a raw pattern match into a clean,
//! human-readable clause.
//!
//! ```text
//! refine(raw, role_kind) -> string | None
//! ```
//!
//! Invariants enforced on every non-`None` output:
//! - never ends mid-word
//! - ends with one of `. ; ! ? ) ] "`, or the literal `...`
//! - at most `max_clause_len` characters (giant-preamble fixtures up to 350)
//! - preserves the actor → modal → action skeleton

use legis_taxa_core::{PipelineConfig, RoleKind};
use legis_taxa_modal::ModalIndex;

const TERMINAL_MARKS: [char; 7] = ['.', ';', '!', '?', ')', ']', '"'];
const SENTENCE_TERMINATORS: [char; 4] = ['.', ';', '!', '?'];

/// Short whole words that are never mistaken for a truncated fragment, even
/// though they're three letters or fewer (§4.4, §9 "three-letter-ending
/// blacklist" — kept as the redundant safety net the design notes call
/// for; the primary check is the terminal-mark invariant enforced by
/// [`refine`] itself).
const SHORT_WORD_WHITELIST: &[&str] = &[
    "the", "of", "to", "in", "is", "be", "by", "or", "an", "on", "at", "as", "we", "us", "it",
    "if", "no", "so",
];

/// Locates the last modal occurrence in `raw`, returning its offset, byte
/// length, and the original-cased surface text.
fn find_last_modal_position(raw: &str) -> Option<(usize, usize, String)> {
    let index = ModalIndex::build(raw);
    let anchor = index.anchors().last()?;
    let text = raw.get(anchor.offset..anchor.end())?.to_string();
    Some((anchor.offset, anchor.length, text))
}

fn strip_leading_article(s: &str) -> String {
    let lower = s.to_lowercase();
    for article in ["the ", "an ", "a "] {
        if let Some(rest) = lower.strip_prefix(article) {
            if !rest.trim().is_empty() {
                let byte_offset = article.len();
                return s[byte_offset..].trim().to_string();
            }
        }
    }
    s.to_string()
}

/// Step 2: scan left from `modal_offset` to the nearest of
/// `{sentence_terminator + space, capital letter after period, start of
/// text}`, clamped to `subject_window`.
fn extract_subject(raw: &str, modal_offset: usize, subject_window: usize) -> String {
    let search_start = modal_offset.saturating_sub(subject_window);
    let Some(slice) = raw.get(search_start..modal_offset) else {
        return String::new();
    };

    let mut boundary_rel = 0usize;
    let bytes = slice.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        let c = b as char;
        if SENTENCE_TERMINATORS.contains(&c) {
            let after = i + 1;
            if after < bytes.len() && (bytes[after] as char).is_whitespace() {
                boundary_rel = after + 1;
            } else if after == bytes.len() {
                boundary_rel = after;
            }
        } else if i > 0 && (bytes[i - 1] as char) == '.' && c.is_ascii_uppercase() {
            boundary_rel = boundary_rel.max(i);
        }
    }

    let start_abs = search_start + boundary_rel.min(slice.len());
    let subject = raw.get(start_abs..modal_offset).unwrap_or("").trim();
    strip_leading_article(subject)
}

/// Step 3: read rightward from `modal_end` up to the next sentence
/// terminator or `action_window`. If the raw capture has no action text and
/// `section_text` is available, re-search it from the point the raw capture
/// ends to recover the sentence tail (giant-preamble / truncated-capture
/// recovery).
fn extract_action(
    raw: &str,
    modal_end: usize,
    action_window: usize,
    section_text: Option<&str>,
) -> String {
    let window_text = |text: &str, from: usize| -> String {
        let end = (from + action_window).min(text.len());
        let Some(slice) = text.get(from..end) else {
            return String::new();
        };
        match slice.find(SENTENCE_TERMINATORS) {
            Some(pos) => slice[..=pos].trim_start().to_string(),
            None => slice.trim_start().to_string(),
        }
    };

    let mut action = window_text(raw, modal_end);
    if action.trim().is_empty() {
        if let Some(section_text) = section_text {
            if let Some(raw_pos) = section_text.find(raw) {
                let continue_from = raw_pos + raw.len();
                if continue_from < section_text.len() {
                    action = window_text(section_text, continue_from);
                }
            }
        }
    }
    action
}

fn ends_with_terminal(s: &str) -> bool {
    s.trim_end().ends_with(TERMINAL_MARKS)
}

/// §4.4 invariant: never ends mid-word. Strips a trailing token of <= 3
/// letters that isn't a whole word in [`SHORT_WORD_WHITELIST`], along with
/// its preceding space.
fn strip_trailing_partial_word(s: &str) -> String {
    let trimmed = s.trim_end();
    let Some(last_space) = trimmed.rfind(char::is_whitespace) else {
        return trimmed.to_string();
    };
    let tail = trimmed[last_space..].trim();
    let letters: String = tail.chars().filter(|c| c.is_alphabetic()).collect();
    if !letters.is_empty()
        && letters.chars().count() <= 3
        && !SHORT_WORD_WHITELIST.contains(&letters.to_lowercase().as_str())
    {
        trimmed[..last_space].trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Step 4: join subject, modal and action with single spaces.
fn combine_clause(subject: &str, modal: &str, action: &str) -> String {
    let base = [subject, modal]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let action_trimmed = action.trim_end();
    if action_trimmed.trim().is_empty() {
        format!("{}...", strip_trailing_partial_word(&base))
    } else if ends_with_terminal(action_trimmed) {
        format!("{base} {action_trimmed}")
    } else {
        let combined = format!("{base} {action_trimmed}");
        format!("{}...", strip_trailing_partial_word(&combined))
    }
}

/// Step 5: if already `<= max`, return as-is; else cut at the last sentence
/// terminator `<= max`; if none, cut at `max - 3` and append `...`.
fn truncate_smart(clause: &str, max: usize) -> String {
    let chars: Vec<char> = clause.chars().collect();
    if chars.len() <= max {
        return clause.to_string();
    }
    let window = &chars[..max];
    if let Some(pos) = window.iter().rposition(|c| SENTENCE_TERMINATORS.contains(c)) {
        return chars[..=pos].iter().collect();
    }
    let cut = max.saturating_sub(3);
    let mut out: String = chars[..cut].iter().collect();
    out.push_str("...");
    out
}

/// Produces a clean clause from a raw pattern match, or `None` for a
/// missing/empty `raw`.
///
/// `section_text`, when given, lets step 3 recover an action tail that fell
/// outside the raw capture (§9 "giant-preamble captures").
pub fn refine(
    raw: Option<&str>,
    role_kind: RoleKind,
    section_text: Option<&str>,
    config: &PipelineConfig,
) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    tracing::trace!(?role_kind, len = raw.len(), "refining clause");

    let (subject, modal, action) = match find_last_modal_position(raw) {
        Some((offset, length, modal_text)) => {
            let subject = extract_subject(raw, offset, config.subject_window);
            let action = extract_action(raw, offset + length, config.action_window, section_text);
            (subject, modal_text, action)
        }
        None => (String::new(), raw.trim().to_string(), String::new()),
    };

    let combined = combine_clause(&subject, &modal, &action);
    Some(truncate_smart(&combined, config.max_clause_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use legis_taxa_core::RoleKind;

    fn cfg() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn refine_none_for_missing_or_empty() {
        assert_eq!(refine(None, RoleKind::Duty, None, &cfg()), None);
        assert_eq!(refine(Some(""), RoleKind::Duty, None, &cfg()), None);
    }

    #[test]
    fn refine_keeps_well_formed_sentence() {
        let raw = "The employer shall ensure the health and safety of employees.";
        let clause = refine(Some(raw), RoleKind::Duty, None, &cfg()).unwrap();
        assert!(clause.ends_with('.'));
        assert!(clause.contains("employer"));
        assert!(clause.contains("shall"));
    }

    #[test]
    fn refine_strips_truncated_trailing_fragment_s3() {
        // §8 scenario S3.
        let raw = "The planning authority must give notice of the appeal to each person on \
                   whom the hazardous substances contravention notice wa";
        let clause = refine(Some(raw), RoleKind::Responsibility, None, &cfg()).unwrap();
        assert!(!clause.ends_with("wa"));
        assert!(clause.ends_with("..."));
        assert!(!clause[..clause.len() - 3].ends_with("wa"));
    }

    #[test]
    fn refine_never_exceeds_giant_preamble_cap() {
        // Each repeated unit ends in its own sentence terminator well within
        // the 120-char subject window, so extract_subject finds a nearby
        // sentence boundary instead of leaking the giant preamble.
        let preamble =
            "Whereas the Secretary of State has consulted the following bodies in accordance with the Act. "
                .repeat(10);
        let raw =
            format!("{preamble}The employer shall ensure compliance with the regulations set out above.");
        let clause = refine(Some(&raw), RoleKind::Duty, None, &cfg()).unwrap();
        assert!(clause.len() <= 350);
        // The 120-char subject window keeps the giant preamble out.
        assert!(!clause.contains("Whereas"));
    }

    #[test]
    fn refine_appends_ellipsis_when_action_missing() {
        let raw = "The employer shall";
        let clause = refine(Some(raw), RoleKind::Duty, None, &cfg()).unwrap();
        assert!(clause.ends_with("..."));
    }

    #[test]
    fn refine_recovers_action_tail_from_section_text() {
        let section = "The employer shall comply with the schedule without delay.";
        // Raw capture ended exactly at the modal, as if the action capture
        // group matched zero characters.
        let raw = "The employer shall";
        let clause = refine(Some(raw), RoleKind::Duty, Some(section), &cfg()).unwrap();
        assert!(clause.contains("comply"));
        assert!(clause.ends_with('.'));
    }

    #[test]
    fn truncate_smart_cuts_at_sentence_boundary() {
        let long = format!("{}. {}", "a".repeat(50), "b".repeat(50));
        let truncated = truncate_smart(&long, 55);
        assert!(truncated.len() <= 55);
        assert!(truncated.ends_with('.'));
    }

    #[test]
    fn truncate_smart_falls_back_to_ellipsis() {
        let long = "a".repeat(400);
        let truncated = truncate_smart(&long, 300);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 300);
    }
}
