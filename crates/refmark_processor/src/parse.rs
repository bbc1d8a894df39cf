//! Free-text citation parsing.
//!
//! Three strategies run in a fixed cascade. A whole-text author-year match
//! is tried first, then sentence segmentation, then comma segmentation. The
//! first structural match wins outright; there is no backtracking, and the
//! final stage accepts anything, so parsing is total.

use regex::Regex;

use refmark_core::record::CitationRecord;

use crate::authors::parse_author_list;
use crate::extract::PatternExtractor;

/// Cascading citation parser.
pub struct CitationParser {
    extractor: PatternExtractor,
    author_year: Regex,
    year: Regex,
}

/// Raw field strings produced by one cascade stage, before author parsing.
struct ParsedFields {
    authors: String,
    title: String,
    journal: String,
    year: String,
}

impl Default for CitationParser {
    fn default() -> Self {
        Self {
            extractor: PatternExtractor::default(),
            author_year: Regex::new(
                r"^(?P<authors>.+?)\s*\((?P<year>19\d{2}|20\d{2})\)\.\s*(?P<title>.+?)\.\s*(?P<rest>.+)$",
            )
            .unwrap(),
            year: Regex::new(r"(19\d{2}|20\d{2})").unwrap(),
        }
    }
}

impl CitationParser {
    /// Parse free text into a record. Never fails: unmatched input falls
    /// through to the comma-split stage, which accepts anything.
    pub fn parse(&self, raw: &str) -> CitationRecord {
        let normalized = raw.replace('\n', " ");
        let text = normalized.trim();

        let fields = self
            .match_author_year(text)
            .or_else(|| self.split_sentences(text))
            .unwrap_or_else(|| self.split_commas(text));

        let mut record = CitationRecord {
            authors: parse_author_list(&fields.authors),
            title: fields.title,
            journal: fields.journal,
            year: fields.year,
            raw_text: raw.trim().to_string(),
            ..Default::default()
        };

        if let Some(doi) = self.extractor.doi(text) {
            record.doi = doi;
        }
        if let Some(url) = self.extractor.url(text) {
            record.url = url;
        }
        if let Some(pages) = self.extractor.pages(text) {
            record.pages = pages;
        }

        record
    }

    /// Stage 1: `Authors (Year). Title. Rest` across the whole text.
    fn match_author_year(&self, text: &str) -> Option<ParsedFields> {
        let caps = self.author_year.captures(text)?;
        Some(ParsedFields {
            authors: caps["authors"].to_string(),
            title: caps["title"].trim().to_string(),
            journal: caps["rest"].trim().to_string(),
            year: caps["year"].to_string(),
        })
    }

    /// Stage 2: split on periods; needs at least author and title segments.
    fn split_sentences(&self, text: &str) -> Option<ParsedFields> {
        let segments: Vec<&str> = text
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if segments.len() < 2 {
            return None;
        }
        Some(ParsedFields {
            authors: segments[0].to_string(),
            title: segments[1].to_string(),
            journal: segments.get(2).copied().unwrap_or("").to_string(),
            year: self.find_year(text),
        })
    }

    /// Stage 3: split on commas. Always succeeds; missing positions are
    /// empty fields.
    fn split_commas(&self, text: &str) -> ParsedFields {
        let segments: Vec<&str> = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        ParsedFields {
            authors: segments.first().copied().unwrap_or("").to_string(),
            title: segments.get(1).copied().unwrap_or("").to_string(),
            journal: segments.get(2).copied().unwrap_or("").to_string(),
            year: self.find_year(text),
        }
    }

    /// First 19xx/20xx substring anywhere in the text, or empty.
    fn find_year(&self, text: &str) -> String {
        self.year
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}
