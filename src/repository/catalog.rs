//! Read-only queries against the Koha catalog schema.
//!
//! Every method here routes through the catalog pool and only ever SELECTs;
//! the schema is owned and mutated exclusively by Koha. Withdrawn items are
//! filtered out at the SQL level since they are never label-eligible.

use crate::{
    error::AppResult,
    models::{Biblio, BiblioMetadata, Branch, CatalogItem},
    repository::{DbRouter, SchemaOwner},
};

const ITEM_COLUMNS: &str = "itemnumber, biblionumber, barcode, itemcallnumber, withdrawn, \
     homebranch, holdingbranch, location, itype, copynumber, dateaccessioned";

#[derive(Clone)]
pub struct CatalogRepository {
    router: DbRouter,
}

impl CatalogRepository {
    pub fn new(router: DbRouter) -> Self {
        Self { router }
    }

    fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        self.router.pool_for(SchemaOwner::Catalog)
    }

    /// Non-withdrawn items with exactly the given barcode
    pub async fn items_by_barcode(&self, barcode: &str) -> AppResult<Vec<CatalogItem>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE barcode = $1 AND withdrawn = 0"
        );

        let items = sqlx::query_as::<_, CatalogItem>(&query)
            .bind(barcode)
            .fetch_all(self.pool())
            .await?;

        Ok(items)
    }

    /// Non-withdrawn items whose barcode, cast to an integer, lies in
    /// `[start, end]` inclusive.
    ///
    /// Barcodes with non-digit characters are excluded by the pattern guard
    /// rather than failing the cast; the length guard keeps the cast inside
    /// bigint (stored barcodes may be up to 20 characters).
    pub async fn items_in_numeric_range(
        &self,
        start: i64,
        end: i64,
    ) -> AppResult<Vec<CatalogItem>> {
        let query = format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM items
            WHERE withdrawn = 0
              AND barcode ~ '^[0-9]+$'
              AND char_length(barcode) <= 18
              AND barcode::bigint BETWEEN $1 AND $2
            ORDER BY barcode::bigint
            "#
        );

        let items = sqlx::query_as::<_, CatalogItem>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(self.pool())
            .await?;

        Ok(items)
    }

    /// Non-withdrawn items whose barcode appears in the given list, as one
    /// set-membership query. Result order is the database's; callers wanting
    /// request order re-sort on the list.
    pub async fn items_with_barcodes(&self, barcodes: &[String]) -> AppResult<Vec<CatalogItem>> {
        if barcodes.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE barcode = ANY($1) AND withdrawn = 0"
        );

        let items = sqlx::query_as::<_, CatalogItem>(&query)
            .bind(barcodes)
            .fetch_all(self.pool())
            .await?;

        Ok(items)
    }

    /// Bibliographic record by id
    pub async fn biblio(&self, biblionumber: i32) -> AppResult<Option<Biblio>> {
        let biblio = sqlx::query_as::<_, Biblio>(
            r#"
            SELECT biblionumber, frameworkcode, author, title,
                   copyrightdate, datecreated, timestamp
            FROM biblio
            WHERE biblionumber = $1
            "#,
        )
        .bind(biblionumber)
        .fetch_optional(self.pool())
        .await?;

        Ok(biblio)
    }

    /// First metadata row for a bibliographic record.
    ///
    /// A record carries at most one row per (format, marcflavour) pair;
    /// ordering on that pair makes "first" deterministic.
    pub async fn first_metadata(&self, biblionumber: i32) -> AppResult<Option<BiblioMetadata>> {
        let metadata = sqlx::query_as::<_, BiblioMetadata>(
            r#"
            SELECT id, biblionumber, format, marcflavour, metadata
            FROM biblio_metadata
            WHERE biblionumber = $1
            ORDER BY format, marcflavour
            LIMIT 1
            "#,
        )
        .bind(biblionumber)
        .fetch_optional(self.pool())
        .await?;

        Ok(metadata)
    }

    /// Branch by code
    pub async fn branch(&self, branchcode: &str) -> AppResult<Option<Branch>> {
        let branch = sqlx::query_as::<_, Branch>(
            r#"
            SELECT branchcode, branchname, branchaddress1, branchcity,
                   branchzip, branchphone, branchemail
            FROM branches
            WHERE branchcode = $1
            "#,
        )
        .bind(branchcode)
        .fetch_optional(self.pool())
        .await?;

        Ok(branch)
    }
}
