//! Signals and composite results for the Making Detector (§4.8).

use std::fmt;

/// Direction a signal pushes the composite log-odds score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Making,
    NotMaking,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Making => "making",
            Direction::NotMaking => "not_making",
        })
    }
}

/// One piece of evidence contributing to a `DetectionResult`.
///
/// `value` is retained for audit and truncated to ~200 bytes (§3).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Signal {
    pub tier: u8,
    pub name: String,
    pub direction: Direction,
    pub confidence: f64,
    pub value: String,
}

const SIGNAL_VALUE_MAX: usize = 200;

impl Signal {
    pub fn new(
        tier: u8,
        name: impl Into<String>,
        direction: Direction,
        confidence: f64,
        value: impl Into<String>,
    ) -> Self {
        let value = truncate_chars(&value.into(), SIGNAL_VALUE_MAX);
        Self {
            tier,
            name: name.into(),
            direction,
            confidence,
            value,
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// `making`, `not_making`, or `uncertain` — the final output of the Making
/// Detector's composite scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Making,
    NotMaking,
    Uncertain,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::Making => "making",
            Classification::NotMaking => "not_making",
            Classification::Uncertain => "uncertain",
        })
    }
}

/// The output of `MakingDetector::detect`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetectionResult {
    pub classification: Classification,
    pub confidence: f64,
    /// The highest tier any contributing signal reached; 0 if `signals` is empty.
    pub tier: u8,
    pub signals: Vec<Signal>,
    pub version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_value_truncated_to_200_chars() {
        let long = "x".repeat(500);
        let signal = Signal::new(4, "desc", Direction::Making, 0.8, long);
        assert_eq!(signal.value.chars().count(), 200);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Making.to_string(), "making");
        assert_eq!(Direction::NotMaking.to_string(), "not_making");
    }
}
