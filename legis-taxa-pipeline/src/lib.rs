//! Pipeline driver and JSONB formatter (§2, §5, §6): orchestrates the
//! per-record stages, dispatches batches across a worker pool, and
//! converts matches to the sidecar persistence representation.

mod batch;
mod jsonb;
mod pipeline;

pub use batch::classify_batch;
pub use jsonb::{jsonb_to_matches, matches_to_jsonb};
pub use pipeline::{process_record, ProcessOutput};

#[cfg(test)]
mod tests {
    #[path = "tests/scenarios.rs"]
    mod scenarios;
}
