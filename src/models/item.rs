//! Catalog item model (Koha `items` table, read-only)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of Koha's `items` table, reduced to the columns label printing
/// reads. `withdrawn != 0` marks an item pulled from circulation; withdrawn
/// items are never eligible for labels and the repository filters them out
/// at the SQL level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogItem {
    pub itemnumber: i32,
    pub biblionumber: i32,
    pub barcode: Option<String>,
    pub itemcallnumber: Option<String>,
    pub withdrawn: i32,
    pub homebranch: Option<String>,
    pub holdingbranch: Option<String>,
    pub location: Option<String>,
    pub itype: Option<String>,
    pub copynumber: Option<String>,
    pub dateaccessioned: Option<NaiveDate>,
}
