//! Field canonicalization for emails and personal names.

use std::sync::LazyLock;

use mailprep_model::Scalar;
use regex::{Captures, Regex};

/// First word character after a word boundary.
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("Invalid word start regex"));

/// Lower-cases and trims an email address.
///
/// No syntax validation is done; an empty result means the row has no
/// usable address.
pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// [`normalize_email`] over an untyped cell.
pub fn normalize_email_value(value: &Scalar) -> String {
    normalize_email(&value.to_text())
}

/// Converts a name to proper case.
///
/// The whole string is lower-cased, then the first character of every run
/// of word characters is upper-cased, so `"MARY-JANE o'neil"` becomes
/// `"Mary-Jane O'Neil"`. Word characters are Unicode, so accented letters
/// start words too.
pub fn proper_case(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let lowered = raw.to_lowercase();
    WORD_START
        .replace_all(&lowered, |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// [`proper_case`] over an untyped cell.
pub fn proper_case_value(value: &Scalar) -> String {
    proper_case(&value.to_text())
}
