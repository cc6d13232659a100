//! Partitioning of source rows into email groups.

use mailprep_model::{
    AccountEntry, CUSTID, EMAIL, EmailGroups, FNAME, LICENSE_TYPE, LNAME, LicenseType, RES_FLAG,
    RawRecord,
};
use tracing::{debug, trace};

use crate::normalize::{normalize_email_value, proper_case_value};

/// Builds the account entry for a row, or `None` when the row has no email
/// or its license type is not eligible.
pub fn account_entry(record: &RawRecord) -> Option<AccountEntry> {
    let email = normalize_email_value(record.get(EMAIL));
    if email.is_empty() {
        return None;
    }
    let license_type = LicenseType::parse(&record.text(LICENSE_TYPE))?;
    Some(AccountEntry {
        cust_id: record.text(CUSTID),
        first_name: proper_case_value(record.get(FNAME)),
        last_name: proper_case_value(record.get(LNAME)),
        email,
        license_type,
        res_flag: record.text(RES_FLAG),
    })
}

/// Folds one row into the group index.
pub fn insert_into_group(mut groups: EmailGroups, record: &RawRecord) -> EmailGroups {
    if let Some(entry) = account_entry(record) {
        groups.admit(entry);
    }
    groups
}

/// Groups license-eligible rows by normalized email.
///
/// Emails and the entries within each group keep first-seen order. Rows
/// without an email or with another license type never create a group.
pub fn build_groups(records: &[RawRecord]) -> EmailGroups {
    let groups = records
        .iter()
        .enumerate()
        .fold(EmailGroups::new(), |groups, (index, record)| {
            let before = groups.entry_count();
            let groups = insert_into_group(groups, record);
            if groups.entry_count() == before {
                trace!(row = index, "row not eligible for grouping");
            }
            groups
        });
    debug!(
        input_rows = records.len(),
        groups = groups.len(),
        grouped_rows = groups.entry_count(),
        "email grouping complete"
    );
    groups
}
