//! Per-record stage orchestration (§2 dataflow, §5 "within a record the
//! stages are sequential").

use legis_taxa_classify::{classify_popimar, classify_purpose};
use legis_taxa_clauses::find_role_holders;
use legis_taxa_core::{duty_type_sorter, popimar_sorter, Match, PipelineConfig, PurposeTag, Record, RoleKind};

/// A processed record together with the raw matches that produced its
/// enrichment — the matches aren't stored on `Record` itself, but the
/// JSONB formatter and callers threading `article` context need them.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub record: Record,
    pub matches: Vec<Match>,
}

/// Runs the full per-record pipeline: purpose first (so an amendment
/// short-circuit can suppress the remaining stages, §8 scenario S7), then
/// actor/duty-type matching across all four role kinds, then popimar.
pub fn process_record(mut record: Record, config: &PipelineConfig) -> ProcessOutput {
    record.purpose = classify_purpose(&record.text);

    if record.purpose == [PurposeTag::Amendment] {
        tracing::debug!("amendment purpose short-circuits role/duty/popimar stages");
        return ProcessOutput {
            record,
            matches: Vec::new(),
        };
    }

    let mut regex_accum = Vec::new();
    let mut all_matches: Vec<Match> = Vec::new();
    let mut duty_types = Vec::new();

    for kind in RoleKind::all() {
        let labels: &[_] = if kind.scans_governed_actors() {
            &record.role
        } else {
            &record.role_gvt
        };
        let out = find_role_holders(kind, labels, &record.text, &mut regex_accum, config);
        match kind {
            RoleKind::Duty => record.duty_holder = out.holders,
            RoleKind::Right => record.rights_holder = out.holders,
            RoleKind::Responsibility => record.responsibility_holder = out.holders,
            RoleKind::Power => record.power_holder = out.holders,
        }
        duty_types.extend(out.duty_types);
        all_matches.extend(out.matches);
    }

    record.duty_type = duty_type_sorter(duty_types);

    let popimar_tags = all_matches
        .iter()
        .filter_map(|m| m.clause.as_deref().map(|c| (c, m.duty_type)))
        .flat_map(|(clause, duty_type)| classify_popimar(clause, Some(duty_type), config))
        .collect::<Vec<_>>();
    record.popimar = popimar_sorter(popimar_tags);

    ProcessOutput {
        record,
        matches: all_matches,
    }
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
