//! MakingDetector (§4.8): classifies a law as `making`, `not_making`, or
//! `uncertain` from metadata alone — no section text involved.

use serde_json::{json, Value};

use legis_taxa_core::{Classification, DetectionResult, Direction, MakingMetadata, PipelineConfig, Signal};

const MAKING_CUES: [&str; 5] = [
    "make provision for securing",
    "provision for",
    "to require",
    "to prohibit",
    "to regulate",
];
const NOT_MAKING_CUES: [&str; 4] = ["to amend", "to revoke", "to repeal", "consequential amendments"];

fn tier1_signals(title: &str) -> Vec<Signal> {
    let lower = title.to_lowercase();
    let mut signals = Vec::new();
    if lower.contains("(commencement") {
        signals.push(Signal::new(1, "title_commencement", Direction::NotMaking, 0.99, title));
    }
    if lower.contains("(appointed day") {
        signals.push(Signal::new(1, "title_appointed_day", Direction::NotMaking, 1.00, title));
    }
    signals
}

fn tier2_signals(title: &str) -> Vec<Signal> {
    let lower = title.to_lowercase();
    const MARKERS: [(&str, &str); 5] = [
        ("(amendment", "title_amendment"),
        ("(revocation", "title_revocation"),
        ("(repeal", "title_repeal"),
        ("(consequential", "title_consequential"),
        ("(transitional", "title_transitional"),
    ];
    MARKERS
        .iter()
        .filter(|(marker, _)| lower.contains(marker))
        .map(|(_, name)| Signal::new(2, *name, Direction::NotMaking, 0.80, title))
        .collect()
}

fn tier3_signals(meta: &MakingMetadata) -> Vec<Signal> {
    let mut signals = Vec::new();
    let Some(body) = meta.body_paras() else {
        return signals;
    };
    let schedule = meta.schedule_paras();

    if body <= 5 {
        if let Some(schedule) = schedule {
            if schedule >= 50 {
                signals.push(Signal::new(
                    3,
                    "low_body_high_schedule",
                    Direction::NotMaking,
                    0.75,
                    format!("body={body} schedule={schedule}"),
                ));
            }
        }
        signals.push(Signal::new(
            3,
            "very_low_body_paras",
            Direction::NotMaking,
            0.70,
            format!("body={body}"),
        ));
    }

    if body > 40 {
        let confidence = (0.40 + (body - 40) as f64 / 500.0).min(0.85);
        signals.push(Signal::new(
            3,
            "high_body_paras",
            Direction::Making,
            confidence,
            format!("body={body}"),
        ));
    }

    signals
}

fn tier4_signals(description: &str) -> Vec<Signal> {
    if description.is_empty() {
        return Vec::new();
    }
    let lower = description.to_lowercase();
    let mut signals: Vec<Signal> = MAKING_CUES
        .iter()
        .filter(|cue| lower.contains(*cue))
        .map(|cue| Signal::new(4, format!("description_cue:{cue}"), Direction::Making, 0.80, description))
        .collect();
    signals.extend(
        NOT_MAKING_CUES
            .iter()
            .filter(|cue| lower.contains(*cue))
            .map(|cue| Signal::new(4, format!("description_cue:{cue}"), Direction::NotMaking, 0.75, description)),
    );
    signals
}

fn log_odds(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

fn sigmoid(l: f64) -> f64 {
    1.0 / (1.0 + (-l).exp())
}

fn signal_delta(signal: &Signal) -> f64 {
    let magnitude = log_odds(signal.confidence);
    match signal.direction {
        Direction::Making => magnitude,
        Direction::NotMaking => -magnitude,
    }
}

/// Runs the full tiered signal pipeline and composite log-odds score over
/// `meta`. Never fails: absent evidence yields the base-rate classification
/// (§7, §8 property 9).
pub fn detect(meta: &MakingMetadata, config: &PipelineConfig) -> DetectionResult {
    let mut signals = Vec::new();
    signals.extend(tier1_signals(&meta.title_en));
    signals.extend(tier2_signals(&meta.title_en));
    signals.extend(tier3_signals(meta));
    signals.extend(tier4_signals(&meta.md_description));

    let tier = signals.iter().map(|s| s.tier).max().unwrap_or(0);

    // A tier-1 signal forces the final classification to its own
    // direction, regardless of what else fired (§4.8).
    if let Some(forced) = signals.iter().find(|s| s.tier == 1) {
        let (classification, confidence) = match forced.direction {
            Direction::Making => (Classification::Making, forced.confidence),
            Direction::NotMaking => (Classification::NotMaking, 1.0 - forced.confidence),
        };
        tracing::debug!(signal = %forced.name, "tier-1 signal forces classification");
        return DetectionResult {
            classification,
            confidence,
            tier,
            signals,
            version: 1,
        };
    }

    let l0 = log_odds(config.making_base_rate);
    let total: f64 = l0 + signals.iter().map(signal_delta).sum::<f64>();
    let confidence = sigmoid(total);

    let (ceiling, floor) = config.making_thresholds;
    let classification = if confidence >= floor {
        Classification::Making
    } else if confidence <= ceiling {
        Classification::NotMaking
    } else {
        Classification::Uncertain
    };

    DetectionResult {
        classification,
        confidence,
        tier,
        signals,
        version: 1,
    }
}

/// Builds the persistence map described in §4.8: `making_confidence`,
/// `making_classification`, `making_detection_tier`, and
/// `making_detection_signals` (nested, carrying `version`, `detected_at`,
/// and stringified-direction signal records).
///
/// `detected_at` is threaded in by the caller rather than stamped here —
/// wall-clock time is a pipeline-boundary concern (§5), not something the
/// detector itself should read.
pub fn to_parsed_law_fields(result: &DetectionResult, detected_at: &str) -> Value {
    let signal_records: Vec<Value> = result
        .signals
        .iter()
        .map(|s| {
            json!({
                "tier": s.tier,
                "name": s.name,
                "direction": s.direction.to_string(),
                "confidence": s.confidence,
                "value": s.value,
            })
        })
        .collect();

    json!({
        "making_confidence": result.confidence,
        "making_classification": result.classification.to_string(),
        "making_detection_tier": result.tier,
        "making_detection_signals": {
            "version": result.version,
            "detected_at": detected_at,
            "signals": signal_records,
        },
    })
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
