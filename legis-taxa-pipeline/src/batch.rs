//! Batch entry point (§5): dispatches records to a worker pool sized to
//! available cores, preserving input order in the output.

use rayon::prelude::*;

use legis_taxa_core::{PipelineConfig, Record};

use crate::pipeline::{process_record, ProcessOutput};

/// Classifies every record in `records`, independently and in parallel.
/// `rayon`'s `into_par_iter().map(..).collect()` gathers results back into
/// input order regardless of which worker finished first.
pub fn classify_batch(records: Vec<Record>, config: &PipelineConfig) -> Vec<ProcessOutput> {
    records
        .into_par_iter()
        .map(|record| process_record(record, config))
        .collect()
}

#[cfg(test)]
#[path = "tests/batch.rs"]
mod tests;
