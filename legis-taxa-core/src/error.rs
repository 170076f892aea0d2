//! Error handling per §7: the core is total over its documented input space.
//!
//! Modelled on `layered-nlp-document::{ProcessError, ProcessResult}`: a
//! result wrapper that *collects* non-fatal failures (a broken regex, a
//! timed-out match attempt) rather than aborting the record, paired with a
//! narrower `thiserror`-derived error reserved for configuration-level
//! failures that do escape to the pipeline/CLI boundary.

use std::fmt;

/// A recoverable failure encountered while processing one record or pattern.
/// Never propagated as an `Err` — always appended to a [`ProcessResult`] or
/// a regex accumulator and logged, per §7's "Pattern compilation failure"
/// and "Match enumeration failure" error classes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// A pattern source failed to compile.
    PatternCompile { source: String, reason: String },
    /// A compiled pattern's match enumeration aborted (e.g. catastrophic
    /// backtracking guard, if the engine exposes one).
    MatchEnumeration { source: String, reason: String },
    /// Metadata needed for a structural signal was missing or invalid
    /// (e.g. a negative paragraph count) — treated as absent, not fatal.
    InconsistentMetadata { field: String, reason: String },
    Other(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::PatternCompile { source, reason } => {
                write!(f, "pattern failed to compile ({reason}): {source}")
            }
            ProcessError::MatchEnumeration { source, reason } => {
                write!(f, "match enumeration aborted ({reason}): {source}")
            }
            ProcessError::InconsistentMetadata { field, reason } => {
                write!(f, "inconsistent metadata field '{field}': {reason}")
            }
            ProcessError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ProcessError {}

/// Wraps a value together with any non-fatal errors/warnings accumulated
/// while producing it. The `value` is always well-formed per the invariants
/// of §3/§8 even when `errors` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult<T> {
    pub value: T,
    pub errors: Vec<ProcessError>,
    pub warnings: Vec<String>,
}

impl<T> ProcessResult<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_errors(value: T, errors: Vec<ProcessError>) -> Self {
        Self {
            value,
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn add_error(&mut self, error: ProcessError) {
        self.errors.push(error);
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProcessResult<U> {
        ProcessResult {
            value: f(self.value),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

/// Configuration-level failures that *do* escape to the pipeline/CLI
/// boundary (§10.2). Never returned by `ActorLib`, `RoleMatcher`,
/// `ClauseRefiner`, `PurposeClassifier`, `PopimarClassifier`, or
/// `MakingDetector`.
#[derive(Debug, thiserror::Error)]
pub enum TaxaError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config from RON: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),
    #[error("failed to serialize record: {0}")]
    RecordSerialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_result_collects_without_aborting() {
        let mut result = ProcessResult::ok(42);
        assert!(!result.has_errors());
        result.add_error(ProcessError::Other("broken pattern".into()));
        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.value, 42);
    }

    #[test]
    fn map_preserves_errors() {
        let mut result = ProcessResult::ok(1);
        result.add_error(ProcessError::Other("x".into()));
        let mapped = result.map(|v| v + 1);
        assert_eq!(mapped.value, 2);
        assert_eq!(mapped.errors.len(), 1);
    }
}
