//! Campaign extract: one sanitized contact row per deliverable source row.

use mailprep_model::{CUSTID, CampaignRecord, EMAIL, FNAME, LICENSE_TYPE, LNAME, RES_FLAG, RawRecord};
use tracing::{debug, trace};

use crate::normalize::{normalize_email_value, proper_case_value};

/// Builds the campaign row for one source row, deliverable or not.
pub fn campaign_record(record: &RawRecord) -> CampaignRecord {
    CampaignRecord {
        destination: normalize_email_value(record.get(EMAIL)),
        first_name: proper_case_value(record.get(FNAME)),
        last_name: proper_case_value(record.get(LNAME)),
        license_type: record.text(LICENSE_TYPE),
        resident_flag: record.text(RES_FLAG),
        customer_id: record.text(CUSTID),
    }
}

/// Maps source rows to campaign rows, dropping rows without an email,
/// first name, or last name.
///
/// Input order is preserved. Dropped rows are not errors.
pub fn process(records: &[RawRecord]) -> Vec<CampaignRecord> {
    let mut output = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let row = campaign_record(record);
        if row.is_deliverable() {
            output.push(row);
        } else {
            trace!(row = index, "dropping row missing email or name");
        }
    }
    debug!(
        input_rows = records.len(),
        output_rows = output.len(),
        dropped_rows = records.len() - output.len(),
        "campaign filter complete"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, first: &str, last: &str, email: &str) -> RawRecord {
        RawRecord::new()
            .with(CUSTID, id)
            .with(FNAME, first)
            .with(LNAME, last)
            .with(EMAIL, email)
            .with(LICENSE_TYPE, "Hunting")
            .with(RES_FLAG, "Resident")
    }

    #[test]
    fn builds_normalized_row() {
        let record = campaign_record(&row(9591943, "ANDREW", "DONATI", " AND.DON@SNOW.EDU "));
        assert_eq!(
            record,
            CampaignRecord {
                destination: "and.don@snow.edu".to_string(),
                first_name: "Andrew".to_string(),
                last_name: "Donati".to_string(),
                license_type: "Hunting".to_string(),
                resident_flag: "Resident".to_string(),
                customer_id: "9591943".to_string(),
            }
        );
    }

    #[test]
    fn drops_rows_missing_required_fields() {
        let records = vec![
            row(1, "JOHN", "DOE", "john@x.com"),
            row(2, "", "DOE", "jane@x.com"),
            row(3, "MIKE", "SMITH", "   "),
            row(4, "LISA", "", "lisa@x.com"),
            row(5, "SARAH", "JOHNSON", "sarah@x.com"),
        ];
        let output = process(&records);
        let ids: Vec<&str> = output.iter().map(|r| r.customer_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn license_and_flag_are_copied_verbatim() {
        let record = RawRecord::new()
            .with(FNAME, "a")
            .with(LNAME, "b")
            .with(EMAIL, "c@d.com")
            .with(LICENSE_TYPE, " fishing ");
        let output = process(&[record]);
        assert_eq!(output[0].license_type, " fishing ");
        assert_eq!(output[0].resident_flag, "");
        assert_eq!(output[0].customer_id, "");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(process(&[]).is_empty());
    }
}
