//! Sanitized email campaign rows.

use serde::{Deserialize, Serialize};

use crate::flat::FlatRecord;

/// One contact row for an email campaign upload.
///
/// Destination, first name, and last name are never empty in rows produced
/// by the campaign filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "License Type")]
    pub license_type: String,
    #[serde(rename = "Resident Flag")]
    pub resident_flag: String,
    #[serde(rename = "Customer ID")]
    pub customer_id: String,
}

impl CampaignRecord {
    /// True when the three required fields are all non-empty.
    pub fn is_deliverable(&self) -> bool {
        !self.destination.is_empty() && !self.first_name.is_empty() && !self.last_name.is_empty()
    }
}

impl FlatRecord for CampaignRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Destination",
        "First Name",
        "Last Name",
        "License Type",
        "Resident Flag",
        "Customer ID",
    ];

    fn values(&self) -> Vec<&str> {
        vec![
            self.destination.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.license_type.as_str(),
            self.resident_flag.as_str(),
            self.customer_id.as_str(),
        ]
    }
}
