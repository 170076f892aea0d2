//! Compiles the dictionary into process-wide immutable regex tables (§5,
//! §9 "Module-level pattern tables"). Built once, behind `once_cell::Lazy`;
//! concurrent readers need no locks.

use once_cell::sync::Lazy;
use regex::Regex;

use legis_taxa_core::ActorLabel;

use crate::dictionary::ACTOR_DICTIONARY;

/// A compiled actor pattern, paired with its optional exclusion checks.
pub struct CompiledActor {
    pub label: ActorLabel,
    /// Leading word-boundary assertion is baked into the pattern so a
    /// capitalized substring of another word can never match (§4.1
    /// contract).
    pub main: Regex,
    pub exclude_following: Vec<Regex>,
    /// Source fragment, returned to callers of `custom_actor_library`.
    pub fragment_source: String,
}

fn build_main_pattern(forms: &[&str]) -> String {
    let alts: Vec<String> = forms.iter().map(|f| regex::escape(f)).collect();
    format!(r"(?i)\b(?:{})\b", alts.join("|"))
}

fn build_exclude_pattern(phrase: &str) -> Regex {
    // Anchored at the start of the tail slice following a match, tolerating
    // the whitespace between the match and the excluded phrase.
    Regex::new(&format!(r"(?i)^\s+{}\b", regex::escape(phrase)))
        .expect("excluded-phrase pattern is a literal and always compiles")
}

pub static COMPILED_ACTORS: Lazy<Vec<CompiledActor>> = Lazy::new(|| {
    ACTOR_DICTIONARY
        .iter()
        .map(|entry| {
            let fragment_source = build_main_pattern(entry.surface_forms);
            let main = Regex::new(&fragment_source).unwrap_or_else(|e| {
                panic!(
                    "built-in actor pattern for '{}' failed to compile: {e}",
                    entry.label
                )
            });
            let exclude_following = entry
                .exclude_following
                .iter()
                .map(|phrase| build_exclude_pattern(phrase))
                .collect();
            CompiledActor {
                label: ActorLabel::new(entry.label),
                main,
                exclude_following,
                fragment_source,
            }
        })
        .collect()
});

/// Longest tail of text, after a match, worth checking against
/// `exclude_following` patterns. Exclusion phrases are short ("interest",
/// "inquiry"), so this budget only needs to cover a handful of words.
const EXCLUDE_LOOKAHEAD: usize = 32;

impl CompiledActor {
    /// Whether a match ending at `end` within `text` should be suppressed
    /// because an excluded phrase immediately follows it.
    pub fn is_excluded_at(&self, text: &str, end: usize) -> bool {
        if self.exclude_following.is_empty() {
            return false;
        }
        let tail_end = (end + EXCLUDE_LOOKAHEAD).min(text.len());
        let Some(tail) = text.get(end..tail_end) else {
            return false;
        };
        self.exclude_following.iter().any(|re| re.is_match(tail))
    }

    /// All non-excluded match spans of this actor's pattern in `text`.
    pub fn find_unsuppressed<'t>(&self, text: &'t str) -> Vec<regex::Match<'t>> {
        self.main
            .find_iter(text)
            .filter(|m| !self.is_excluded_at(text, m.end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dictionary_entry_compiles() {
        assert_eq!(COMPILED_ACTORS.len(), ACTOR_DICTIONARY.len());
    }

    #[test]
    fn public_interest_is_excluded() {
        let public = COMPILED_ACTORS
            .iter()
            .find(|a| a.label.as_str() == "Public")
            .unwrap();
        assert!(public.find_unsuppressed("This is in the public interest.").is_empty());
        assert_eq!(
            public
                .find_unsuppressed("Members of the public may attend.")
                .len(),
            1
        );
    }

    #[test]
    fn boundary_prevents_substring_match() {
        let employer = COMPILED_ACTORS
            .iter()
            .find(|a| a.label.as_str() == "Org: Employer")
            .unwrap();
        // "Employership" should not match "employer" as a whole word.
        assert!(employer.find_unsuppressed("Employership is not a word.").is_empty());
        assert_eq!(employer.find_unsuppressed("The employer must act.").len(), 1);
    }
}
