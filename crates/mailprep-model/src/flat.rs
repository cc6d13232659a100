//! Output rows with a fixed column order.

/// A row that serializes as a flat list of string fields.
///
/// `values()` returns one entry per column in `COLUMNS`, in the same order.
pub trait FlatRecord {
    /// Column headers, in output order.
    const COLUMNS: &'static [&'static str];

    /// Field values, aligned with [`FlatRecord::COLUMNS`].
    fn values(&self) -> Vec<&str>;

    /// Pairs each column header with its value.
    fn fields(&self) -> Vec<(&'static str, &str)> {
        Self::COLUMNS.iter().copied().zip(self.values()).collect()
    }
}
