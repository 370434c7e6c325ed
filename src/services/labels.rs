//! Label generation service
//!
//! One request is one bounded read-only pass: resolve the barcode selection
//! to a set of non-withdrawn items, then build a printable record per item
//! (author resolution with MARC-XML fallback, call-number split, branch
//! name lookup). No state is kept across requests.

use std::collections::HashMap;

use crate::{
    barcode::BarcodeSelection,
    callnumber::split_call_number,
    error::{AppError, AppResult},
    marc::author_from_marc_xml,
    models::{
        biblio::sanitize_author,
        label::{LabelQuery, LabelRecord},
        CatalogItem,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LabelService {
    repository: Repository,
}

impl LabelService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Generate printable label records for a barcode selection.
    ///
    /// A well-formed request with an invalid or unmatched range yields an
    /// empty list; a request naming neither a barcode nor a range is
    /// rejected.
    pub async fn generate(&self, query: &LabelQuery) -> AppResult<Vec<LabelRecord>> {
        let selection = selection_from_query(query)?;
        let items = self.resolve_items(&selection).await?;

        tracing::debug!("Label selection {:?} matched {} item(s)", selection, items.len());

        let mut branch_names: HashMap<String, Option<String>> = HashMap::new();
        let mut records = Vec::with_capacity(items.len());

        for item in items {
            let record = self.build_record(&item, &mut branch_names).await?;
            records.push(record);
        }

        Ok(records)
    }

    /// Fetch the items a selection names, excluding withdrawn stock.
    async fn resolve_items(&self, selection: &BarcodeSelection) -> AppResult<Vec<CatalogItem>> {
        let catalog = &self.repository.catalog;

        match selection {
            BarcodeSelection::Single(barcode) => catalog.items_by_barcode(barcode).await,
            BarcodeSelection::Numeric { start, end } => {
                catalog.items_in_numeric_range(*start, *end).await
            }
            BarcodeSelection::Prefixed { .. } => {
                let codes = selection.expand();
                let mut items = catalog.items_with_barcodes(&codes).await?;

                // The membership query returns database order; put the
                // items back into ascending index order.
                let position: HashMap<&str, usize> = codes
                    .iter()
                    .enumerate()
                    .map(|(i, code)| (code.as_str(), i))
                    .collect();
                items.sort_by_key(|item| {
                    item.barcode
                        .as_deref()
                        .and_then(|b| position.get(b).copied())
                        .unwrap_or(usize::MAX)
                });

                Ok(items)
            }
            BarcodeSelection::Invalid => Ok(Vec::new()),
        }
    }

    async fn build_record(
        &self,
        item: &CatalogItem,
        branch_names: &mut HashMap<String, Option<String>>,
    ) -> AppResult<LabelRecord> {
        let author = self.resolve_author(item.biblionumber).await?;

        let call_number = item.itemcallnumber.clone().unwrap_or_default();
        let parts = split_call_number(&call_number);

        let branch_code = item.homebranch.clone();
        let branch_name = match &branch_code {
            Some(code) => self.branch_name(code, branch_names).await?,
            None => None,
        };

        Ok(LabelRecord {
            barcode: item.barcode.clone().unwrap_or_default(),
            author,
            call_number,
            classification: parts.classification,
            author_mark: parts.author_mark,
            branch_code,
            branch_name,
            location: item.location.clone(),
        })
    }

    /// Author for a bibliographic record: the relational field when set,
    /// otherwise datafield 700$a of the record's MARC-XML metadata. A
    /// missing record, missing metadata row, or unusable blob resolves to
    /// an empty author; it never fails the batch.
    async fn resolve_author(&self, biblionumber: i32) -> AppResult<String> {
        let Some(biblio) = self.repository.catalog.biblio(biblionumber).await? else {
            tracing::warn!("Item references missing biblio {}", biblionumber);
            return Ok(String::new());
        };

        if biblio.has_author() {
            return Ok(biblio.display_author());
        }

        let Some(metadata) = self.repository.catalog.first_metadata(biblionumber).await? else {
            return Ok(String::new());
        };

        // The recovered name gets the same noise-strip as the relational
        // author column.
        Ok(author_from_marc_xml(&metadata.metadata)
            .map(|author| sanitize_author(&author))
            .unwrap_or_default())
    }

    /// Branch name lookup with per-request memoization (one query per
    /// distinct branch code).
    async fn branch_name(
        &self,
        code: &str,
        cache: &mut HashMap<String, Option<String>>,
    ) -> AppResult<Option<String>> {
        if let Some(name) = cache.get(code) {
            return Ok(name.clone());
        }

        let name = self
            .repository
            .catalog
            .branch(code)
            .await?
            .and_then(|b| b.branchname);
        cache.insert(code.to_string(), name.clone());
        Ok(name)
    }
}

/// Turn the raw request into a barcode selection.
///
/// An exact barcode wins over a range when both are present, matching the
/// form's precedence. Naming neither is a validation error, as is a valid
/// range spanning more codes than one print run can ask for; everything
/// else fails soft into [`BarcodeSelection::Invalid`].
fn selection_from_query(query: &LabelQuery) -> AppResult<BarcodeSelection> {
    let non_blank = |s: &Option<String>| {
        s.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let selection = if let Some(barcode) = non_blank(&query.barcode_num) {
        BarcodeSelection::single(&barcode)
    } else {
        match (non_blank(&query.barcode_start), non_blank(&query.barcode_end)) {
            (Some(start), Some(end)) => BarcodeSelection::range(&start, &end),
            (None, None) => {
                return Err(AppError::Validation(
                    "Either barcode_num or barcode_start/barcode_end is required".to_string(),
                ))
            }
            _ => BarcodeSelection::Invalid,
        }
    };

    // A well-formed range that is simply too wide is a caller mistake, not
    // "no matches"; reject it instead of resolving it to an empty set.
    if selection.exceeds_span_limit() {
        return Err(AppError::Validation(format!(
            "Barcode range spans more than {} codes",
            crate::barcode::MAX_RANGE_SPAN
        )));
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(num: Option<&str>, start: Option<&str>, end: Option<&str>) -> LabelQuery {
        LabelQuery {
            barcode_num: num.map(String::from),
            barcode_start: start.map(String::from),
            barcode_end: end.map(String::from),
        }
    }

    #[test]
    fn exact_barcode_takes_precedence() {
        let q = query(Some("39001"), Some("100"), Some("200"));
        assert_eq!(
            selection_from_query(&q).unwrap(),
            BarcodeSelection::Single("39001".to_string())
        );
    }

    #[test]
    fn range_is_parsed_when_no_exact_barcode() {
        let q = query(None, Some("100"), Some("200"));
        assert_eq!(
            selection_from_query(&q).unwrap(),
            BarcodeSelection::Numeric { start: 100, end: 200 }
        );
    }

    #[test]
    fn empty_request_is_a_validation_error() {
        let q = query(None, None, None);
        assert!(matches!(
            selection_from_query(&q),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn half_open_range_fails_soft() {
        let q = query(None, Some("100"), None);
        assert_eq!(selection_from_query(&q).unwrap(), BarcodeSelection::Invalid);

        let q = query(None, None, Some("200"));
        assert_eq!(selection_from_query(&q).unwrap(), BarcodeSelection::Invalid);
    }

    #[test]
    fn oversized_valid_range_is_rejected_not_empty() {
        use crate::barcode::MAX_RANGE_SPAN;

        // Equal prefixes, well-formed suffixes: valid input, so it must not
        // be indistinguishable from "no matches".
        let over = format!("A{}", MAX_RANGE_SPAN + 1);
        let q = query(None, Some("A1"), Some(&over));
        assert!(matches!(
            selection_from_query(&q),
            Err(AppError::Validation(_))
        ));

        let at_limit = format!("A{}", MAX_RANGE_SPAN);
        let q = query(None, Some("A1"), Some(&at_limit));
        assert!(selection_from_query(&q).is_ok());
    }

    #[test]
    fn blank_strings_count_as_absent() {
        let q = query(Some("  "), Some("A100"), Some("A110"));
        assert_eq!(
            selection_from_query(&q).unwrap(),
            BarcodeSelection::Prefixed {
                prefix: "A".to_string(),
                start: 100,
                end: 110,
            }
        );
    }
}
