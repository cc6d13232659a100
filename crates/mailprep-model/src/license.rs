//! License categories eligible for deduplication.

use std::fmt;

use serde::{Deserialize, Serialize};

/// License categories admitted into email groups.
///
/// Matching is exact and case-sensitive: `"hunting"` is not eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseType {
    Hunting,
    Combination,
}

/// Labels of every eligible license category.
pub const ELIGIBLE_LICENSE_TYPES: &[&str] = &["Hunting", "Combination"];

impl LicenseType {
    /// Parses an eligible license label. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Hunting" => Some(Self::Hunting),
            "Combination" => Some(Self::Combination),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hunting => "Hunting",
            Self::Combination => "Combination",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
