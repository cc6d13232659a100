//! End-to-end processing of a loaded dataset.
//!
//! The campaign extract and the deduplication extract share nothing but the
//! input rows, so they can run one after the other or on two threads. Inside
//! the deduplication pipeline the group index is always complete before
//! classification and personalization read it.

use std::time::Instant;

use mailprep_model::{
    CampaignRecord, DuplicateStats, EmailGroups, ExecutionMode, PersonalizedRecord, RawRecord,
};
use tracing::{info, info_span};

use crate::campaign;
use crate::classify::classify;
use crate::grouping::build_groups;
use crate::personalize::personalize_groups;

/// Output of the deduplication pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupeResult {
    pub personalized: Vec<PersonalizedRecord>,
    pub stats: DuplicateStats,
}

/// Output of both pipelines for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetResult {
    pub campaign: Vec<CampaignRecord>,
    pub personalized: Vec<PersonalizedRecord>,
    pub stats: DuplicateStats,
}

/// Runs the campaign extract.
pub fn run_campaign(records: &[RawRecord]) -> Vec<CampaignRecord> {
    let span = info_span!("campaign", input_rows = records.len());
    let _guard = span.enter();
    let start = Instant::now();
    let output = campaign::process(records);
    info!(
        campaign_rows = output.len(),
        duration_ms = start.elapsed().as_millis(),
        "campaign extract complete"
    );
    output
}

/// Runs grouping, classification, and personalization.
pub fn run_dedupe(records: &[RawRecord]) -> DedupeResult {
    let span = info_span!("dedupe", input_rows = records.len());
    let _guard = span.enter();
    let start = Instant::now();
    let groups: EmailGroups = build_groups(records);
    let stats = classify(&groups, records.len());
    let personalized = personalize_groups(&groups);
    info!(
        unique_emails = stats.unique_emails,
        duplicate_emails = stats.duplicate_emails,
        personalized_rows = personalized.len(),
        duration_ms = start.elapsed().as_millis(),
        "dedupe extract complete"
    );
    DedupeResult {
        personalized,
        stats,
    }
}

/// Runs both pipelines over `records`.
pub fn process_dataset(records: &[RawRecord], mode: ExecutionMode) -> DatasetResult {
    let (campaign, dedupe) = match mode {
        ExecutionMode::Sequential => (run_campaign(records), run_dedupe(records)),
        ExecutionMode::Parallel => {
            let parent = tracing::Span::current();
            std::thread::scope(|scope| {
                let campaign_parent = parent.clone();
                let campaign_handle =
                    scope.spawn(move || campaign_parent.in_scope(|| run_campaign(records)));
                let dedupe = parent.in_scope(|| run_dedupe(records));
                let campaign = match campaign_handle.join() {
                    Ok(campaign) => campaign,
                    Err(payload) => std::panic::resume_unwind(payload),
                };
                (campaign, dedupe)
            })
        }
    };
    DatasetResult {
        campaign,
        personalized: dedupe.personalized,
        stats: dedupe.stats,
    }
}
