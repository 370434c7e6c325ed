//! Barcode range parsing
//!
//! Print requests name either a single barcode or an inclusive range. Ranges
//! come in two shapes: purely numeric endpoints ("100" to "250"), compared as
//! integers against the stored barcodes, and alphanumeric endpoints sharing
//! an alphabetic prefix ("A100" to "A250"), expanded into the explicit
//! barcode list `prefix + index` for every index in the range.

/// Largest number of barcodes an alphanumeric range may expand to. A wider
/// span is rejected as a validation error before expansion; label print
/// runs are far below this.
pub const MAX_RANGE_SPAN: u64 = 5000;

/// Parsed form of the barcode input on a label request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarcodeSelection {
    /// Exact match on one barcode
    Single(String),
    /// Both endpoints are decimal digits; match barcodes cast to integers
    Numeric { start: i64, end: i64 },
    /// Shared alphabetic prefix with a numeric index range
    Prefixed { prefix: String, start: u64, end: u64 },
    /// Malformed input (mismatched prefixes, bad suffix, ...): empty result
    Invalid,
}

impl BarcodeSelection {
    /// Parse a single-barcode request
    pub fn single(barcode: &str) -> Self {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return BarcodeSelection::Invalid;
        }
        BarcodeSelection::Single(barcode.to_string())
    }

    /// Parse a range request from its two endpoints.
    ///
    /// Malformed input never errors; it parses to [`BarcodeSelection::Invalid`]
    /// and the caller resolves that to an empty item set.
    pub fn range(start: &str, end: &str) -> Self {
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() || end.is_empty() {
            return BarcodeSelection::Invalid;
        }

        if is_decimal(start) && is_decimal(end) {
            // Endpoints wider than i64 are excluded by the same fail-soft
            // rule that drops non-castable stored barcodes.
            return match (start.parse::<i64>(), end.parse::<i64>()) {
                (Ok(s), Ok(e)) => BarcodeSelection::Numeric { start: s, end: e },
                _ => BarcodeSelection::Invalid,
            };
        }

        let (Some((start_prefix, start_index)), Some((end_prefix, end_index))) =
            (split_prefixed(start), split_prefixed(end))
        else {
            return BarcodeSelection::Invalid;
        };

        if start_prefix != end_prefix {
            return BarcodeSelection::Invalid;
        }

        BarcodeSelection::Prefixed {
            prefix: start_prefix.to_string(),
            start: start_index,
            end: end_index,
        }
    }

    /// Whether a prefixed range spans more than [`MAX_RANGE_SPAN`] codes.
    /// Callers reject such requests before expanding them.
    pub fn exceeds_span_limit(&self) -> bool {
        match self {
            BarcodeSelection::Prefixed { start, end, .. } if end >= start => {
                end - start + 1 > MAX_RANGE_SPAN
            }
            _ => false,
        }
    }

    /// Expand a prefixed range into its explicit barcode list, in ascending
    /// index order. Empty for descending ranges and every non-prefixed
    /// variant.
    pub fn expand(&self) -> Vec<String> {
        let BarcodeSelection::Prefixed { prefix, start, end } = self else {
            return Vec::new();
        };
        if end < start {
            return Vec::new();
        }
        if self.exceeds_span_limit() {
            // Oversized spans are rejected upstream; never materialize one.
            return Vec::new();
        }
        (*start..=*end).map(|i| format!("{prefix}{i}")).collect()
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Split an alphanumeric barcode endpoint into (prefix, numeric suffix).
///
/// The prefix is the longest leading run of non-digit, non-whitespace
/// characters; everything after it must be decimal digits. Returns `None`
/// when either part is empty or the suffix holds stray characters.
fn split_prefixed(s: &str) -> Option<(&str, u64)> {
    let cut = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() || c.is_whitespace())
        .map(|(i, _)| i)?;
    let (prefix, suffix) = s.split_at(cut);
    if prefix.is_empty() || !is_decimal(suffix) {
        return None;
    }
    Some((prefix, suffix.parse().ok()?))
}
