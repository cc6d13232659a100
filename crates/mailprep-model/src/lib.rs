//! Data model for customer record processing.
//!
//! Source rows arrive as [`RawRecord`]s of untyped [`Scalar`] cells. The
//! engine turns them into two extracts: [`CampaignRecord`]s for a bulk
//! email upload and one [`PersonalizedRecord`] per email address, with
//! [`DuplicateStats`] describing how accounts were collapsed.

pub mod campaign;
pub mod dedupe;
pub mod error;
pub mod flat;
pub mod license;
pub mod options;
pub mod record;
pub mod scalar;

pub use campaign::CampaignRecord;
pub use dedupe::{
    AccountEntry, DuplicateGroup, DuplicateStats, EmailGroup, EmailGroups,
    MULTIPLE_ACCOUNTS_NO, MULTIPLE_ACCOUNTS_YES, PersonalizedRecord,
};
pub use error::{ModelError, Result};
pub use flat::FlatRecord;
pub use license::{ELIGIBLE_LICENSE_TYPES, LicenseType};
pub use options::{ExecutionMode, LineEnding};
pub use record::{CUSTID, EMAIL, FNAME, KNOWN_COLUMNS, LICENSE_TYPE, LNAME, RES_FLAG, RawRecord};
pub use scalar::{Scalar, format_numeric};
