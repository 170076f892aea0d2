//! Recognized configuration options (§6) and their defaults.

use crate::DutyTypeTag;

/// Tunable budgets and thresholds for the pipeline.
///
/// A caller may override any subset via [`PipelineConfig::default`] + field
/// assignment, or load a complete document with [`PipelineConfig::from_ron`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Texts longer than this switch `RoleMatcher` from a full-text scan to
    /// a modal-windowed scan.
    pub window_threshold: usize,
    /// Characters of "subject capture budget" to the left of a modal anchor.
    pub subject_window: usize,
    /// Characters of "action capture budget" to the right of a modal anchor.
    pub action_window: usize,
    /// Hard cap on a refined clause's length (test fixtures accept up to 350).
    pub max_clause_len: usize,
    /// Empirical prior that a law is "making" in the complete absence of evidence.
    pub making_base_rate: f64,
    /// `(not_making_ceiling, making_floor)` — at or below the first, classify
    /// `not_making`; at or above the second, classify `making`.
    pub making_thresholds: (f64, f64),
    /// Duty-type-ish labels that trigger the `Risk Control` POPIMAR default
    /// when no POPIMAR category pattern fired (§4.6). Closed-set strings are
    /// matched against `DutyTypeTag::as_str()`, plus the legacy
    /// `"Process, Rule, Constraint, Condition"` label kept for forward
    /// compatibility with duty types outside the four-value enum.
    pub popimar_eligible_duty_types: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_threshold: 50_000,
            subject_window: 120,
            action_window: 200,
            max_clause_len: 300,
            making_base_rate: 0.173,
            making_thresholds: (0.30, 0.70),
            popimar_eligible_duty_types: vec![
                DutyTypeTag::Duty.as_str().to_string(),
                DutyTypeTag::Right.as_str().to_string(),
                DutyTypeTag::Responsibility.as_str().to_string(),
                DutyTypeTag::Power.as_str().to_string(),
                "Process, Rule, Constraint, Condition".to_string(),
            ],
        }
    }
}

impl PipelineConfig {
    pub fn is_popimar_eligible(&self, duty_type: DutyTypeTag) -> bool {
        self.popimar_eligible_duty_types
            .iter()
            .any(|s| s == duty_type.as_str())
    }

    /// Round-trips through RON, convenient for small human-edited
    /// config/fixture documents (§10.3).
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }
}
