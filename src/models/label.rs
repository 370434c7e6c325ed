//! Label request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label generation request: either an exact barcode or an inclusive range.
///
/// Range endpoints are either both decimal ("100" / "250") or both an
/// alphabetic prefix plus numeric suffix with matching prefixes
/// ("A100" / "A250"). An invalid range yields an empty result, not an error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LabelQuery {
    /// Exact barcode to print
    pub barcode_num: Option<String>,
    /// Start of a barcode range (requires `barcode_end`)
    pub barcode_start: Option<String>,
    /// End of a barcode range (requires `barcode_start`)
    pub barcode_end: Option<String>,
}

/// One printable label
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LabelRecord {
    /// Item barcode
    pub barcode: String,
    /// Author, from the bibliographic record or its MARC-XML metadata
    pub author: String,
    /// Full shelving call number as stored
    pub call_number: String,
    /// Classification part of the call number (first spine line)
    pub classification: String,
    /// Author-mark part of the call number (second spine line)
    pub author_mark: String,
    /// Home branch code
    pub branch_code: Option<String>,
    /// Resolved home branch name
    pub branch_name: Option<String>,
    /// Shelving location within the branch
    pub location: Option<String>,
}

/// Label generation response
#[derive(Debug, Serialize, ToSchema)]
pub struct LabelResponse {
    /// Printable records, in request order
    pub labels: Vec<LabelRecord>,
    /// Number of records
    pub total: usize,
}
