//! Placeholder numbering and substitution.
//!
//! Documents cite library records with `[id:ref001]` tokens. Resolution is
//! two passes over the blocks: the first assigns sequence numbers in
//! first-appearance order, the second replaces tokens with rendered
//! citations. Splitting the passes keeps numbering independent of which ids
//! happen to have records.

use indexmap::IndexMap;
use regex::Regex;

use refmark_core::library::Library;
use refmark_core::style::Style;

use crate::document::Document;
use crate::render::inline_citation;

/// Sequence numbers assigned to placeholder ids, in first-appearance order.
pub type PlaceholderMap = IndexMap<String, usize>;

/// Two-pass scanner that turns `[id:...]` tokens into rendered citations.
pub struct PlaceholderResolver {
    token: Regex,
}

impl Default for PlaceholderResolver {
    fn default() -> Self {
        Self {
            token: Regex::new(r"\[id:([^\]]*)\]").unwrap(),
        }
    }
}

impl PlaceholderResolver {
    /// Pass 1: number every distinct id, scanning blocks in order and each
    /// block left to right. Repeats reuse their number. Ids with no backing
    /// record still consume a number, so adding the record later never
    /// renumbers existing citations.
    pub fn number_placeholders<D: Document>(&self, document: &D) -> PlaceholderMap {
        let mut map = PlaceholderMap::new();
        for index in 0..document.block_count() {
            for caps in self.token.captures_iter(document.block_text(index)) {
                let id = caps[1].to_string();
                let next = map.len() + 1;
                map.entry(id).or_insert(next);
            }
        }
        map
    }

    /// Pass 2: replace every occurrence of each resolvable token with its
    /// rendered citation. Tokens whose id has no record are left verbatim.
    pub fn substitute<D: Document>(
        &self,
        document: &mut D,
        library: &Library,
        style: Style,
        placeholders: &PlaceholderMap,
    ) {
        for index in 0..document.block_count() {
            let mut text = document.block_text(index).to_string();
            let mut changed = false;

            for (id, number) in placeholders {
                if let Some(record) = library.get(id) {
                    let token = format!("[id:{}]", id);
                    if text.contains(&token) {
                        text = text.replace(&token, &inline_citation(style, record, *number));
                        changed = true;
                    }
                }
            }

            if changed {
                document.set_block_text(index, text);
            }
        }
    }

    /// Number, substitute, and return the map for reference list building.
    pub fn resolve<D: Document>(
        &self,
        document: &mut D,
        library: &Library,
        style: Style,
    ) -> PlaceholderMap {
        let placeholders = self.number_placeholders(document);
        self.substitute(document, library, style, &placeholders);
        placeholders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PlainDocument;
    use refmark_core::record::{Author, CitationRecord};
    use refmark_core::style::NumericStyle;

    fn library_of(entries: &[(&str, &str)]) -> Library {
        let mut library = Library::new();
        for (family, year) in entries {
            library.add(CitationRecord {
                authors: vec![Author::new(family, "")],
                title: format!("{} title", family),
                journal: "Journal".to_string(),
                year: year.to_string(),
                ..Default::default()
            });
        }
        library
    }

    #[test]
    fn test_numbering_is_first_appearance_order() {
        let document = PlainDocument::parse("See [id:b] and [id:a].\n\nAlso [id:b].");
        let resolver = PlaceholderResolver::default();
        let placeholders = resolver.number_placeholders(&document);

        assert_eq!(placeholders.get("b"), Some(&1));
        assert_eq!(placeholders.get("a"), Some(&2));
        assert_eq!(placeholders.len(), 2);
    }

    #[test]
    fn test_substitution_replaces_every_occurrence() {
        let library = library_of(&[("Reeves", "1995")]);
        let mut document = PlainDocument::parse("[id:ref001] begins; [id:ref001] ends.");
        let resolver = PlaceholderResolver::default();
        resolver.resolve(&mut document, &library, Style::NameYear);

        assert_eq!(
            document.to_string(),
            "(Reeves, 1995) begins; (Reeves, 1995) ends."
        );
    }

    #[test]
    fn test_unknown_ids_survive_and_consume_numbers() {
        let library = library_of(&[("Reeves", "1995")]);
        let mut document = PlainDocument::parse("First [id:zzz], then [id:ref001].");
        let resolver = PlaceholderResolver::default();
        let placeholders =
            resolver.resolve(&mut document, &library, Style::Numeric(NumericStyle::Ieee));

        assert_eq!(placeholders.get("zzz"), Some(&1));
        assert_eq!(placeholders.get("ref001"), Some(&2));
        assert_eq!(document.to_string(), "First [id:zzz], then [2].");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let library = library_of(&[("Reeves", "1995")]);
        let mut document = PlainDocument::parse("Cite [id:ref001] and keep [id:missing].");
        let resolver = PlaceholderResolver::default();
        resolver.resolve(&mut document, &library, Style::NameYear);
        let once = document.to_string();

        resolver.resolve(&mut document, &library, Style::NameYear);
        assert_eq!(document.to_string(), once);
    }

    #[test]
    fn heading_blocks_are_scanned_and_rewritten() {
        let library = library_of(&[("Reeves", "1995")]);
        let mut document = PlainDocument::parse("# About [id:ref001]\n\nBody [id:ref001].");
        let resolver = PlaceholderResolver::default();
        let placeholders = resolver.resolve(&mut document, &library, Style::NameYear);

        assert_eq!(placeholders.len(), 1);
        assert_eq!(
            document.to_string(),
            "# About (Reeves, 1995)\n\nBody (Reeves, 1995)."
        );
    }

    #[test]
    fn empty_id_token_is_numbered_but_unresolvable() {
        let library = library_of(&[("Reeves", "1995")]);
        let mut document = PlainDocument::parse("Odd [id:] token.");
        let resolver = PlaceholderResolver::default();
        let placeholders = resolver.resolve(&mut document, &library, Style::NameYear);

        assert_eq!(placeholders.get(""), Some(&1));
        assert_eq!(document.to_string(), "Odd [id:] token.");
    }
}
