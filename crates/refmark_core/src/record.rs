/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliographic record model.
//!
//! Records are assembled from free text by the parsing cascade, so every
//! descriptive field is a plain string and the empty string means "absent".
//! There are no optional fields on the wire: a record always serializes all
//! of its keys, and missing keys deserialize to their empty defaults.

use serde::{Deserialize, Serialize};

/// A single author, split into family and given parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    /// Family name: "Smith".
    pub family: String,
    /// Given name or initials: "Jane" or "J.".
    pub given: String,
}

impl Author {
    pub fn new(family: &str, given: &str) -> Self {
        Self {
            family: family.to_string(),
            given: given.to_string(),
        }
    }
}

/// A bibliographic entry in the library.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CitationRecord {
    /// Stable identifier assigned by the library: "ref001".
    #[serde(default)]
    pub id: String,
    /// Authors in the order they appeared in the source text.
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub issue: String,
    /// Page range normalized to "123-145".
    #[serde(default)]
    pub pages: String,
    /// Four-digit publication year, or empty.
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub doi: String,
    #[serde(default)]
    pub url: String,
    /// The original citation text, kept verbatim for re-editing.
    #[serde(default)]
    pub raw_text: String,
    /// Opaque file references; abandoned when the record is deleted.
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl CitationRecord {
    /// True when `year` is empty or a four-digit year in 1900-2099.
    pub fn has_valid_year(&self) -> bool {
        if self.year.is_empty() {
            return true;
        }
        if self.year.len() != 4 || !self.year.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        self.year.starts_with("19") || self.year.starts_with("20")
    }

    /// One-line author list: "Smith, J.; Doe, A.".
    pub fn author_summary(&self) -> String {
        self.authors
            .iter()
            .map(|author| {
                if author.given.is_empty() {
                    author.family.clone()
                } else {
                    format!("{}, {}", author.family, author.given)
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_every_field() {
        let record = CitationRecord {
            id: "ref001".to_string(),
            title: "Genetic algorithms".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        for key in [
            "id", "authors", "title", "journal", "volume", "issue", "pages", "year", "doi",
            "url", "raw_text", "attachments",
        ] {
            assert!(json.contains(&format!("\"{}\"", key)), "missing key {}", key);
        }
    }

    #[test]
    fn missing_fields_deserialize_to_empty() {
        let record: CitationRecord =
            serde_json::from_str(r#"{"id":"ref007","title":"Sparse entry"}"#).unwrap();
        assert_eq!(record.id, "ref007");
        assert_eq!(record.title, "Sparse entry");
        assert_eq!(record.year, "");
        assert!(record.authors.is_empty());
        assert!(record.attachments.is_empty());
    }

    #[test]
    fn test_year_validation() {
        let mut record = CitationRecord::default();
        assert!(record.has_valid_year());

        record.year = "1995".to_string();
        assert!(record.has_valid_year());

        record.year = "2099".to_string();
        assert!(record.has_valid_year());

        record.year = "1899".to_string();
        assert!(!record.has_valid_year());

        record.year = "199".to_string();
        assert!(!record.has_valid_year());

        record.year = "19x5".to_string();
        assert!(!record.has_valid_year());
    }

    #[test]
    fn author_summary_joins_with_semicolons() {
        let record = CitationRecord {
            authors: vec![Author::new("Smith", "J."), Author::new("Doe", "")],
            ..Default::default()
        };
        assert_eq!(record.author_summary(), "Smith, J.; Doe");
    }
}
