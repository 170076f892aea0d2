//! Shared data model, configuration and error handling for the `legis-taxa`
//! workspace: the UK-legislation actor/duty/purpose/POPIMAR taxonomy engine
//! and the making-vs-amending detector.
//!
//! ## Core types
//!
//! - [`ActorLabel`] - colon-delimited hierarchical actor identifier
//! - [`RoleKind`] / [`DutyTypeTag`] - the DRRP taxonomy
//! - [`ModalKind`] / [`ModalAnchor`] / [`Window`] - modal lexicon and search windows
//! - [`Match`] - the atomic output of `RoleMatcher`
//! - [`PurposeTag`] / [`PopimarTag`] - the 15- and 16-value closed taxonomies
//! - [`Signal`] / [`DetectionResult`] / [`Classification`] - Making Detector output
//! - [`Record`] / [`MakingMetadata`] - pipeline input/output
//! - [`PipelineConfig`] - tunable budgets and thresholds (§6)
//! - [`ProcessError`] / [`ProcessResult`] / [`TaxaError`] - error handling (§7)

mod actor_label;
mod config;
mod error;
mod modal;
mod record;
mod role;
mod role_match;
mod signal;
mod taxonomy;

pub use actor_label::ActorLabel;
pub use config::PipelineConfig;
pub use error::{ProcessError, ProcessResult, TaxaError};
pub use modal::{ModalAnchor, ModalKind, Window};
pub use record::{is_known_key, MakingMetadata, Record};
pub use role::{duty_type_sorter, DutyTypeTag, RoleKind};
pub use role_match::Match;
pub use signal::{Classification, DetectionResult, Direction, Signal};
pub use taxonomy::{popimar_sorter, sort_purposes, PopimarTag, PurposeTag};
