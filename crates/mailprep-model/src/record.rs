//! Raw source rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// Customer identifier column.
pub const CUSTID: &str = "CUSTID";
/// First name column.
pub const FNAME: &str = "FNAME";
/// Last name column.
pub const LNAME: &str = "LNAME";
/// Email address column.
pub const EMAIL: &str = "EMAIL";
/// License category column.
pub const LICENSE_TYPE: &str = "LICENSE_TYPE";
/// Residency flag column.
pub const RES_FLAG: &str = "RES_FLAG";

/// Columns the engine reads. Other columns are carried but ignored.
pub const KNOWN_COLUMNS: &[&str] = &[CUSTID, FNAME, LNAME, EMAIL, LICENSE_TYPE, RES_FLAG];

static NULL: Scalar = Scalar::Null;

/// One source row: column name to untyped cell value.
///
/// A missing column reads exactly like an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, Scalar>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Scalar>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Returns the cell for `column`, or `Scalar::Null` when absent.
    pub fn get(&self, column: &str) -> &Scalar {
        self.fields.get(column).unwrap_or(&NULL)
    }

    /// Returns the cell for `column` coerced to text.
    pub fn text(&self, column: &str) -> String {
        self.get(column).to_text()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<Scalar>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}
