//! The pipeline's input/output record and the Making Detector's metadata.
//!
//! §9 "Dynamic keys in records": the upstream scraper/parser accepts both
//! symbolic and string-quoted keys. This crate normalizes at the boundary
//! into one concrete struct with known fields, plus a free-form sidecar map
//! for pass-through fields the UI expects (Design Note, Open Question 1 —
//! bare list is canonical for *new* output; `from_json` below still accepts
//! a legacy `{"items": [...]}` wrapper on read for the holder-ish fields).

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::{ActorLabel, DutyTypeTag, PopimarTag, PurposeTag};

/// A record flowing through the Taxa Classification Engine.
///
/// `text`, `role`, and `role_gvt` are inputs; the remaining fields are
/// enrichments the pipeline adds in place. Records are immutable inputs
/// augmented to produce outputs — nothing reads back its own enrichment.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub text: String,
    pub role: Vec<ActorLabel>,
    pub role_gvt: Vec<ActorLabel>,

    #[serde(default)]
    pub duty_type: Vec<DutyTypeTag>,
    #[serde(default)]
    pub duty_holder: Vec<ActorLabel>,
    #[serde(default)]
    pub rights_holder: Vec<ActorLabel>,
    #[serde(default)]
    pub responsibility_holder: Vec<ActorLabel>,
    #[serde(default)]
    pub power_holder: Vec<ActorLabel>,
    #[serde(default)]
    pub popimar: Vec<PopimarTag>,
    #[serde(default)]
    pub purpose: Vec<PurposeTag>,

    /// Pass-through fields the caller/UI needs that this crate doesn't
    /// model (e.g. a document id, an `article` context thread). Never
    /// inspected by the classifiers themselves. Flattened so these fields
    /// re-emit at the top level on serialize, matching how they arrived —
    /// an empty map flattens to nothing, so there's no need for a
    /// `skip_serializing_if` alongside it.
    #[serde(flatten, default)]
    pub sidecar: Map<String, Value>,
}

/// Known top-level keys, recognized in either plain (`"role"`) or symbolic
/// (`":role"`, legacy Elixir-atom-inspector style) form.
const KNOWN_KEYS: &[&str] = &[
    "text",
    "role",
    "role_gvt",
    "duty_type",
    "duty_holder",
    "rights_holder",
    "responsibility_holder",
    "power_holder",
    "popimar",
    "purpose",
];

fn normalize_key(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

/// Whether `key` (symbolic or plain) names one of `Record`'s typed fields.
pub fn is_known_key(key: &str) -> bool {
    KNOWN_KEYS.contains(&normalize_key(key))
}

/// Accepts either a bare JSON array or a legacy `{"items": [...]}` wrapper
/// for a holder-ish field. New output never writes the wrapper form.
fn unwrap_items(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(obj) => obj
            .get("items")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn parse_actor_list(value: &Value) -> Vec<ActorLabel> {
    unwrap_items(value)
        .iter()
        .filter_map(|v| v.as_str())
        .map(ActorLabel::new)
        .collect()
}

fn parse_duty_type_list(value: &Value) -> Vec<DutyTypeTag> {
    unwrap_items(value)
        .iter()
        .filter_map(|v| v.as_str())
        .filter_map(DutyTypeTag::parse)
        .collect()
}

fn parse_popimar_list(value: &Value) -> Vec<PopimarTag> {
    unwrap_items(value)
        .iter()
        .filter_map(|v| v.as_str())
        .filter_map(PopimarTag::parse)
        .collect()
}

fn parse_purpose_list(value: &Value) -> Vec<PurposeTag> {
    unwrap_items(value)
        .iter()
        .filter_map(|v| v.as_str())
        .filter_map(PurposeTag::parse)
        .collect()
}

impl Record {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Normalizes a raw JSON object into a `Record`, accepting symbolic or
    /// string-quoted keys and preserving anything unrecognized in `sidecar`.
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut record = Record::default();
        let mut sidecar = Map::new();

        for (raw_key, value) in map {
            let key = normalize_key(raw_key);
            match key {
                "text" => record.text = value.as_str().unwrap_or_default().to_string(),
                "role" => record.role = parse_actor_list(value),
                "role_gvt" => record.role_gvt = parse_actor_list(value),
                "duty_type" => record.duty_type = parse_duty_type_list(value),
                "duty_holder" => record.duty_holder = parse_actor_list(value),
                "rights_holder" => record.rights_holder = parse_actor_list(value),
                "responsibility_holder" => record.responsibility_holder = parse_actor_list(value),
                "power_holder" => record.power_holder = parse_actor_list(value),
                "popimar" => record.popimar = parse_popimar_list(value),
                "purpose" => record.purpose = parse_purpose_list(value),
                _ => {
                    sidecar.insert(key.to_string(), value.clone());
                }
            }
        }

        record.sidecar = sidecar;
        record
    }

    /// True when no holder field has been populated and `duty_type` is empty
    /// — the state `Record::new` starts in, and the state amendment
    /// detection leaves a record in (§8 scenario S7).
    pub fn has_no_holders(&self) -> bool {
        self.duty_type.is_empty()
            && self.duty_holder.is_empty()
            && self.rights_holder.is_empty()
            && self.responsibility_holder.is_empty()
            && self.power_holder.is_empty()
    }

    /// All actor labels named by either input list, deduplicated.
    pub fn all_input_actors(&self) -> Vec<ActorLabel> {
        let mut seen = BTreeSet::new();
        self.role
            .iter()
            .chain(self.role_gvt.iter())
            .filter(|label| seen.insert((*label).clone()))
            .cloned()
            .collect()
    }
}

/// Metadata the Making Detector classifies from, independent of `Record`'s
/// section `text` (§4.8, §6).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MakingMetadata {
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub md_description: String,
    /// Negative values are treated as missing (§7 "Inconsistent metadata").
    pub md_body_paras: Option<i64>,
    pub md_schedule_paras: Option<i64>,
}

impl MakingMetadata {
    /// `None` if missing or negative, matching §7's "treat as missing" rule.
    pub fn body_paras(&self) -> Option<u64> {
        self.md_body_paras.filter(|&n| n >= 0).map(|n| n as u64)
    }

    pub fn schedule_paras(&self) -> Option<u64> {
        self.md_schedule_paras.filter(|&n| n >= 0).map(|n| n as u64)
    }
}
