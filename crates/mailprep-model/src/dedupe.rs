//! Email groups, duplicate statistics, and personalized rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::flat::FlatRecord;
use crate::license::LicenseType;

/// One license-eligible account inside an email group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntry {
    pub cust_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub license_type: LicenseType,
    pub res_flag: String,
}

/// Accounts sharing one normalized email, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailGroup {
    pub email: String,
    pub entries: Vec<AccountEntry>,
}

impl EmailGroup {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when more than one account shares the address.
    pub fn is_duplicate(&self) -> bool {
        self.entries.len() > 1
    }
}

/// Email groups keyed by normalized email, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailGroups {
    groups: Vec<EmailGroup>,
    index: HashMap<String, usize>,
}

impl EmailGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the group for `email`, creating an empty one on first use.
    pub fn ensure_group(&mut self, email: &str) -> &mut EmailGroup {
        let position = match self.index.get(email) {
            Some(&position) => position,
            None => {
                let position = self.groups.len();
                self.groups.push(EmailGroup::new(email));
                self.index.insert(email.to_string(), position);
                position
            }
        };
        &mut self.groups[position]
    }

    /// Appends `entry` to the group keyed by its email.
    pub fn admit(&mut self, entry: AccountEntry) {
        let email = entry.email.clone();
        self.ensure_group(&email).entries.push(entry);
    }

    pub fn get(&self, email: &str) -> Option<&EmailGroup> {
        self.index.get(email).map(|&position| &self.groups[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmailGroup> {
        self.groups.iter()
    }

    /// Groups holding at least one account.
    pub fn non_empty(&self) -> impl Iterator<Item = &EmailGroup> {
        self.groups.iter().filter(|group| !group.is_empty())
    }

    /// Number of keys, including any empty groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total accounts across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(EmailGroup::len).sum()
    }
}

impl<'a> IntoIterator for &'a EmailGroups {
    type Item = &'a EmailGroup;
    type IntoIter = std::slice::Iter<'a, EmailGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An email shared by more than one eligible account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    pub email: String,
    pub count: usize,
    pub customers: Vec<AccountEntry>,
}

/// Summary of one grouping run.
///
/// `total_records` counts every input row. The unique and duplicate counts
/// only consider groups with at least one license-eligible account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateStats {
    pub total_records: usize,
    pub unique_emails: usize,
    pub duplicate_emails: usize,
    pub duplicate_groups: Vec<DuplicateGroup>,
}

impl DuplicateStats {
    /// Accounts folded into another row of the personalized output.
    pub fn collapsed_accounts(&self) -> usize {
        self.duplicate_groups
            .iter()
            .map(|group| group.count.saturating_sub(1))
            .sum()
    }
}

/// Value of the "Multiple Accounts" column for shared addresses.
pub const MULTIPLE_ACCOUNTS_YES: &str = "Yes";
/// Value of the "Multiple Accounts" column for single-account addresses.
pub const MULTIPLE_ACCOUNTS_NO: &str = "No";

/// The single output row for one email group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedRecord {
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "License Type")]
    pub license_type: String,
    #[serde(rename = "Customer IDs")]
    pub customer_ids: String,
    #[serde(rename = "Multiple Accounts")]
    pub multiple_accounts: String,
    #[serde(rename = "Account Count")]
    pub account_count: String,
}

impl PersonalizedRecord {
    pub fn has_multiple_accounts(&self) -> bool {
        self.multiple_accounts == MULTIPLE_ACCOUNTS_YES
    }
}

impl FlatRecord for PersonalizedRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Destination",
        "First Name",
        "Last Name",
        "License Type",
        "Customer IDs",
        "Multiple Accounts",
        "Account Count",
    ];

    fn values(&self) -> Vec<&str> {
        vec![
            self.destination.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.license_type.as_str(),
            self.customer_ids.as_str(),
            self.multiple_accounts.as_str(),
            self.account_count.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, email: &str) -> AccountEntry {
        AccountEntry {
            cust_id: id.to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: email.to_string(),
            license_type: LicenseType::Hunting,
            res_flag: "Resident".to_string(),
        }
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let mut groups = EmailGroups::new();
        groups.admit(entry("1", "b@x.com"));
        groups.admit(entry("2", "a@x.com"));
        groups.admit(entry("3", "b@x.com"));

        let emails: Vec<&str> = groups.iter().map(|g| g.email.as_str()).collect();
        assert_eq!(emails, vec!["b@x.com", "a@x.com"]);
        let ids: Vec<&str> = groups
            .get("b@x.com")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.cust_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(groups.entry_count(), 3);
    }

    #[test]
    fn empty_groups_are_skipped_by_non_empty() {
        let mut groups = EmailGroups::new();
        groups.ensure_group("empty@x.com");
        groups.admit(entry("1", "a@x.com"));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.non_empty().count(), 1);
    }

    #[test]
    fn stats_serialize_with_camel_case_keys() {
        let stats = DuplicateStats {
            total_records: 3,
            unique_emails: 1,
            duplicate_emails: 1,
            duplicate_groups: vec![DuplicateGroup {
                email: "a@x.com".to_string(),
                count: 2,
                customers: vec![entry("1", "a@x.com"), entry("2", "a@x.com")],
            }],
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalRecords"], 3);
        assert_eq!(json["duplicateGroups"][0]["customers"][1]["custId"], "2");
        assert_eq!(
            json["duplicateGroups"][0]["customers"][0]["licenseType"],
            "Hunting"
        );
        assert_eq!(stats.collapsed_accounts(), 1);
    }
}
