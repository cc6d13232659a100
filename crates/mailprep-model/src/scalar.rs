//! Untyped cell values as produced by spreadsheet and CSV readers.

use serde::{Deserialize, Serialize};

/// A single cell value from a source row.
///
/// Readers may deliver ids as numbers or as text depending on the source
/// format, so the value keeps its original shape until [`Scalar::to_text`]
/// coerces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Empty cell or missing column.
    #[default]
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Scalar {
    /// Coerces the value to its string form.
    ///
    /// This is the only place a cell is converted to text; downstream code
    /// works exclusively with the returned strings.
    ///
    /// Only `Null` becomes empty. Numeric zero renders as `"0"` and `false`
    /// as `"false"`, so a customer id of `0` is kept rather than blanked.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => format_numeric(*value),
            Self::Boolean(value) => value.to_string(),
        }
    }

    /// Returns true for `Null` and for text that is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(value) => value.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// Spreadsheet readers deliver integral ids as floats, so `9591943.0`
/// must render as `"9591943"`.
///
/// # Examples
///
/// ```
/// use mailprep_model::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(9591943.0), "9591943");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(value: f64) -> String {
    let s = format!("{value}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_empty_text() {
        assert_eq!(Scalar::Null.to_text(), "");
        assert!(Scalar::Null.is_empty());
    }

    #[test]
    fn numbers_render_without_decimal_noise() {
        assert_eq!(Scalar::Integer(9591943).to_text(), "9591943");
        assert_eq!(Scalar::Float(9591943.0).to_text(), "9591943");
        assert_eq!(Scalar::Float(12.50).to_text(), "12.5");
        assert_eq!(Scalar::Integer(0).to_text(), "0");
    }

    #[test]
    fn large_integers_keep_all_digits() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(1e21), "1000000000000000000000");
    }

    #[test]
    fn text_is_returned_verbatim() {
        assert_eq!(Scalar::from("  Mixed Case ").to_text(), "  Mixed Case ");
        assert!(!Scalar::from(" ").is_empty());
    }

    #[test]
    fn options_map_to_null() {
        assert_eq!(Scalar::from(None::<&str>), Scalar::Null);
        assert_eq!(Scalar::from(Some(3_i64)), Scalar::Integer(3));
    }

    #[test]
    fn zero_and_false_are_not_blank() {
        assert_eq!(Scalar::Float(0.0).to_text(), "0");
        assert!(!Scalar::Integer(0).is_empty());
        assert!(!Scalar::Boolean(false).is_empty());
    }

    #[test]
    fn booleans_render_as_words() {
        assert_eq!(Scalar::Boolean(true).to_text(), "true");
        assert_eq!(Scalar::Boolean(false).to_text(), "false");
    }
}
