/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Identifier and page-range extraction.
//!
//! These scans are independent of the overall citation format: they run on
//! the normalized text before structural parsing and their results are
//! merged into the record no matter which parsing stage succeeds.

use regex::Regex;

/// Regex-based scanner for DOIs, URLs, and page ranges.
pub struct PatternExtractor {
    doi: Regex,
    url: Regex,
    pages: Regex,
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self {
            doi: Regex::new(r"(10\.\d{4,9}/[-._;()/:A-Za-z0-9]+)").unwrap(),
            // Greedy to the next whitespace; trailing punctuation is kept.
            url: Regex::new(r"(https?://\S+)").unwrap(),
            pages: Regex::new(r"(\d{1,5}\s*[-–]\s*\d{1,5})").unwrap(),
        }
    }
}

impl PatternExtractor {
    /// First DOI in the text, if any.
    pub fn doi(&self, text: &str) -> Option<String> {
        self.doi.find(text).map(|m| m.as_str().to_string())
    }

    /// First URL in the text, if any.
    pub fn url(&self, text: &str) -> Option<String> {
        self.url.find(text).map(|m| m.as_str().to_string())
    }

    /// First page range, normalized to `digits-digits`.
    pub fn pages(&self, text: &str) -> Option<String> {
        self.pages.find(text).map(|m| normalize_pages(m.as_str()))
    }
}

/// Strip interior whitespace and force the dash to a plain hyphen.
fn normalize_pages(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '–' { '-' } else { c })
        .collect()
}
