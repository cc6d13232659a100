//! Collapsing an email group into a single personalized row.

use std::collections::HashSet;

use mailprep_model::{
    AccountEntry, EmailGroup, EmailGroups, MULTIPLE_ACCOUNTS_NO, MULTIPLE_ACCOUNTS_YES,
    PersonalizedRecord,
};
use tracing::debug;

const LIST_SEPARATOR: &str = ", ";

/// Builds the personalized row for a non-empty group of accounts.
///
/// A single account is copied as-is. For several accounts, first and last
/// names are listed once each in first-seen order (independently of each
/// other), while license types and customer ids are listed once per account.
///
/// Returns `None` for an empty slice.
pub fn synthesize(entries: &[AccountEntry]) -> Option<PersonalizedRecord> {
    match entries {
        [] => None,
        [single] => Some(PersonalizedRecord {
            destination: single.email.clone(),
            first_name: single.first_name.clone(),
            last_name: single.last_name.clone(),
            license_type: single.license_type.to_string(),
            customer_ids: single.cust_id.clone(),
            multiple_accounts: MULTIPLE_ACCOUNTS_NO.to_string(),
            account_count: "1".to_string(),
        }),
        [first, ..] => Some(PersonalizedRecord {
            destination: first.email.clone(),
            first_name: join_distinct(entries.iter().map(|e| e.first_name.as_str())),
            last_name: join_distinct(entries.iter().map(|e| e.last_name.as_str())),
            license_type: join_all(entries.iter().map(|e| e.license_type.as_str())),
            customer_ids: join_all(entries.iter().map(|e| e.cust_id.as_str())),
            multiple_accounts: MULTIPLE_ACCOUNTS_YES.to_string(),
            account_count: entries.len().to_string(),
        }),
    }
}

/// [`synthesize`] for an [`EmailGroup`].
pub fn synthesize_group(group: &EmailGroup) -> Option<PersonalizedRecord> {
    synthesize(&group.entries)
}

/// One personalized row per non-empty group, in group order.
pub fn personalize_groups(groups: &EmailGroups) -> Vec<PersonalizedRecord> {
    let records: Vec<PersonalizedRecord> = groups.iter().filter_map(synthesize_group).collect();
    debug!(
        groups = groups.len(),
        personalized_rows = records.len(),
        "personalization complete"
    );
    records
}

fn join_all<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(LIST_SEPARATOR)
}

fn join_distinct<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailprep_model::LicenseType;

    fn entry(id: &str, first: &str, last: &str, license: LicenseType) -> AccountEntry {
        AccountEntry {
            cust_id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: "p@x.com".to_string(),
            license_type: license,
            res_flag: "Resident".to_string(),
        }
    }

    #[test]
    fn single_entry_copies_fields() {
        let record = synthesize(&[entry("9", "John", "Doe", LicenseType::Hunting)]).unwrap();
        assert_eq!(record.destination, "p@x.com");
        assert_eq!(record.first_name, "John");
        assert_eq!(record.license_type, "Hunting");
        assert_eq!(record.customer_ids, "9");
        assert_eq!(record.multiple_accounts, "No");
        assert_eq!(record.account_count, "1");
    }

    #[test]
    fn multiple_entries_merge_names_and_ids() {
        let record = synthesize(&[
            entry("1", "Peter", "Parker", LicenseType::Combination),
            entry("2", "Mary", "Jane", LicenseType::Combination),
        ])
        .unwrap();
        assert_eq!(record.first_name, "Peter, Mary");
        assert_eq!(record.last_name, "Parker, Jane");
        assert_eq!(record.license_type, "Combination, Combination");
        assert_eq!(record.customer_ids, "1, 2");
        assert_eq!(record.multiple_accounts, "Yes");
        assert_eq!(record.account_count, "2");
    }

    #[test]
    fn names_dedupe_independently() {
        let record = synthesize(&[
            entry("1", "John", "Doe", LicenseType::Hunting),
            entry("2", "John", "Smith", LicenseType::Hunting),
            entry("3", "Jane", "Doe", LicenseType::Combination),
        ])
        .unwrap();
        assert_eq!(record.first_name, "John, Jane");
        assert_eq!(record.last_name, "Doe, Smith");
        assert_eq!(record.license_type, "Hunting, Hunting, Combination");
        assert_eq!(record.account_count, "3");
    }

    #[test]
    fn empty_names_are_kept_as_list_members() {
        let record = synthesize(&[
            entry("1", "", "Doe", LicenseType::Hunting),
            entry("2", "Ann", "Doe", LicenseType::Hunting),
        ])
        .unwrap();
        assert_eq!(record.first_name, ", Ann");
        assert_eq!(record.last_name, "Doe");
    }

    #[test]
    fn empty_group_yields_nothing() {
        assert!(synthesize(&[]).is_none());
    }
}
