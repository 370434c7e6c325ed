//! Library branch model (Koha `branches` table, read-only)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of Koha's `branches` table (address/contact subset)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Branch {
    pub branchcode: String,
    pub branchname: Option<String>,
    pub branchaddress1: Option<String>,
    pub branchcity: Option<String>,
    pub branchzip: Option<String>,
    pub branchphone: Option<String>,
    pub branchemail: Option<String>,
}
