//! Bibliographic record models (Koha `biblio` and `biblio_metadata` tables)
//!
//! These are read-only views onto an externally owned schema; rows are
//! created and mutated only by Koha itself.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Characters stripped from displayed author names: anything that is not a
/// letter, whitespace, or ordinary name punctuation.
static AUTHOR_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z.,'\-\s]").unwrap());

/// Strip punctuation noise from an author name for printing.
///
/// Applied to every printed author, whether it came from the relational
/// `biblio.author` column or was recovered from MARC-XML metadata.
pub fn sanitize_author(author: &str) -> String {
    AUTHOR_NOISE.replace_all(author, "").into_owned()
}

/// One row of Koha's `biblio` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Biblio {
    pub biblionumber: i32,
    pub frameworkcode: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub copyrightdate: Option<i16>,
    pub datecreated: Option<NaiveDate>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Biblio {
    /// Author name cleaned for printing: punctuation noise (catalog markup,
    /// bracketed dates, diacritic escapes) is stripped.
    pub fn display_author(&self) -> String {
        match &self.author {
            Some(author) => sanitize_author(author),
            None => String::new(),
        }
    }

    /// Whether the relational author field carries a usable value
    pub fn has_author(&self) -> bool {
        self.author.as_deref().is_some_and(|a| !a.trim().is_empty())
    }
}

/// One row of Koha's `biblio_metadata` table: a full MARC serialization of
/// the record. Unique per (biblionumber, format, marcflavour).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BiblioMetadata {
    pub id: i32,
    pub biblionumber: i32,
    pub format: String,
    pub marcflavour: String,
    pub metadata: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biblio(author: Option<&str>) -> Biblio {
        Biblio {
            biblionumber: 1,
            frameworkcode: None,
            author: author.map(String::from),
            title: None,
            copyrightdate: None,
            datecreated: None,
            timestamp: None,
        }
    }

    #[test]
    fn display_author_strips_noise() {
        let b = biblio(Some("O'Brien, Flann [1911-1966]"));
        assert_eq!(b.display_author(), "O'Brien, Flann -");
    }

    #[test]
    fn display_author_keeps_plain_names() {
        let b = biblio(Some("Le Guin, Ursula K."));
        assert_eq!(b.display_author(), "Le Guin, Ursula K.");
    }

    #[test]
    fn sanitize_author_covers_fallback_names() {
        // Names recovered from MARC-XML get the same strip as the
        // relational column.
        assert_eq!(sanitize_author("Doe, Jane [1911-1966]"), "Doe, Jane -");
        assert_eq!(sanitize_author("Le Guin, Ursula K."), "Le Guin, Ursula K.");
    }

    #[test]
    fn missing_author_displays_empty() {
        assert_eq!(biblio(None).display_author(), "");
        assert!(!biblio(None).has_author());
        assert!(!biblio(Some("  ")).has_author());
        assert!(biblio(Some("Doe, Jane")).has_author());
    }
}
