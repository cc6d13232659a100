//! Duplicate statistics over a finished group index.

use mailprep_model::{DuplicateGroup, DuplicateStats, EmailGroups};
use tracing::debug;

/// Computes unique and duplicate email counts.
///
/// `total_records` is the number of source rows, independent of any
/// filtering. Empty groups are ignored.
pub fn classify(groups: &EmailGroups, total_records: usize) -> DuplicateStats {
    let mut stats = DuplicateStats {
        total_records,
        ..DuplicateStats::default()
    };
    for group in groups.non_empty() {
        stats.unique_emails += 1;
        if group.is_duplicate() {
            stats.duplicate_emails += 1;
            stats.duplicate_groups.push(DuplicateGroup {
                email: group.email.clone(),
                count: group.len(),
                customers: group.entries.clone(),
            });
        }
    }
    debug!(
        total_records = stats.total_records,
        unique_emails = stats.unique_emails,
        duplicate_emails = stats.duplicate_emails,
        "duplicate classification complete"
    );
    stats
}
