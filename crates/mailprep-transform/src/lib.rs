//! Transformation engine for customer records.
//!
//! Two independent extracts are derived from the same source rows:
//!
//! - **Campaign**: [`campaign::process`] normalizes every row and keeps
//!   those with an email, first name, and last name.
//! - **Deduplication**: [`grouping::build_groups`] collects license-eligible
//!   rows per normalized email, [`classify::classify`] summarizes the groups,
//!   and [`personalize::personalize_groups`] emits exactly one row per group.
//!
//! Nothing in this crate fails: malformed rows are dropped from the extract
//! that cannot use them.

pub mod campaign;
pub mod classify;
pub mod grouping;
pub mod normalize;
pub mod personalize;
pub mod pipeline;

pub use classify::classify;
pub use grouping::build_groups;
pub use normalize::{normalize_email, proper_case};
pub use personalize::{personalize_groups, synthesize};
pub use pipeline::{DatasetResult, DedupeResult, process_dataset, run_campaign, run_dedupe};
