//! JSONB sidecar formatter (§6): converts structured matches to the
//! persistence representation and back.

use serde_json::{json, Value};

use legis_taxa_core::{ActorLabel, DutyTypeTag, Match};

/// `{ "entries": [{"holder", "duty_type", "clause", "article"}], "holders":
/// [ActorLabel], "articles": [string] }`. `holders` is deduplicated in
/// first-seen order; `articles` is empty unless matches carry one.
pub fn matches_to_jsonb(matches: &[Match]) -> Value {
    let mut holders: Vec<&ActorLabel> = Vec::new();
    let mut articles: Vec<&str> = Vec::new();

    for m in matches {
        if !holders.contains(&&m.holder) {
            holders.push(&m.holder);
        }
        if let Some(article) = &m.article {
            if !articles.contains(&article.as_str()) {
                articles.push(article);
            }
        }
    }

    let entries: Vec<Value> = matches
        .iter()
        .map(|m| {
            json!({
                "holder": m.holder.as_str(),
                "duty_type": m.duty_type.as_str(),
                "clause": m.clause,
                "article": m.article,
            })
        })
        .collect();

    json!({
        "entries": entries,
        "holders": holders.iter().map(|h| h.as_str()).collect::<Vec<_>>(),
        "articles": articles,
    })
}

/// Parses a JSONB sidecar document back into matches (§8 property 7).
/// Malformed entries are skipped rather than failing the whole document.
pub fn jsonb_to_matches(value: &Value) -> Vec<Match> {
    value
        .get("entries")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            let holder = entry.get("holder")?.as_str()?;
            let duty_type = DutyTypeTag::parse(entry.get("duty_type")?.as_str()?)?;
            let clause = entry.get("clause").and_then(Value::as_str).map(str::to_string);
            let article = entry.get("article").and_then(Value::as_str).map(str::to_string);
            Some(
                Match::new(ActorLabel::new(holder), duty_type)
                    .with_clause(clause)
                    .with_article(article),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/jsonb.rs"]
mod tests;
