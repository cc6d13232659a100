//! Built-in sample dataset for demonstrations and tests.

use mailprep_model::{CUSTID, EMAIL, FNAME, KNOWN_COLUMNS, LICENSE_TYPE, LNAME, RES_FLAG, RawRecord};

/// Column order of the sample dataset.
pub const SAMPLE_COLUMNS: &[&str] = KNOWN_COLUMNS;

const SAMPLE_ROWS: &[(i64, &str, &str, &str, &str, &str)] = &[
    (9591943, "ANDREW", "DONATI", "AND.DON@SNOW.EDU", "Combination", "Resident"),
    (9591944, "SARAH", "JOHNSON", "sarah.j@email.com", "Hunting", "Resident"),
    (9591945, "MIKE", "SMITH", "mike@test.com", "Fishing", "Non-Resident"),
    (9591946, "LISA", "BROWN", "sarah.j@email.com", "Combination", "Resident"),
    (9591947, "JOHN", "DOE", "john.doe@example.com", "Hunting", "Resident"),
    (9591948, "JANE", "DOE", "john.doe@example.com", "Fishing", "Resident"),
    (9591949, "PETER", "PARKER", "p.parker@dailybugle.com", "Combination", "Non-Resident"),
    (9591950, "MARY", "JANE", "p.parker@dailybugle.com", "Hunting", "Resident"),
];

/// Eight customer rows covering shared emails, ineligible license types,
/// and mixed-case addresses.
pub fn sample_records() -> Vec<RawRecord> {
    SAMPLE_ROWS
        .iter()
        .map(|&(id, first, last, email, license, res)| {
            RawRecord::new()
                .with(CUSTID, id)
                .with(FNAME, first)
                .with(LNAME, last)
                .with(EMAIL, email)
                .with(LICENSE_TYPE, license)
                .with(RES_FLAG, res)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_eight_numbered_customers() {
        let records = sample_records();
        assert_eq!(records.len(), 8);
        assert_eq!(records[0].text(CUSTID), "9591943");
        assert_eq!(records[7].text(CUSTID), "9591950");
        for record in &records {
            assert_eq!(record.len(), SAMPLE_COLUMNS.len());
        }
    }
}
