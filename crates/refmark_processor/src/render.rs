/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Inline citation and reference list rendering.

use refmark_core::library::Library;
use refmark_core::record::CitationRecord;
use refmark_core::style::{NumericStyle, Style};

use crate::document::Document;
use crate::resolver::PlaceholderMap;

/// Render the inline form of a citation.
///
/// Name-year styles draw on the record; numeric styles render the assigned
/// sequence number and ignore the record entirely.
pub fn inline_citation(style: Style, record: &CitationRecord, number: usize) -> String {
    match style {
        Style::NameYear => name_year_inline(record),
        // GB/T 7714 and IEEE agree on bracketed numbers; one arm keeps that
        // parity explicit.
        Style::Numeric(NumericStyle::Gbt7714 | NumericStyle::Ieee) => format!("[{}]", number),
    }
}

/// The four author-year templates, chosen by author count. An empty year
/// renders as-is; no "n.d." is substituted.
fn name_year_inline(record: &CitationRecord) -> String {
    match record.authors.as_slice() {
        [] => format!("(Unknown, {})", record.year),
        [only] => format!("({}, {})", only.family, record.year),
        [first, second] => format!("({} & {}, {})", first.family, second.family, record.year),
        [first, ..] => format!("({} et al., {})", first.family, record.year),
    }
}

/// One reference list entry. The format is shared by every style.
pub fn reference_line(record: &CitationRecord, number: usize) -> String {
    format!(
        "[{}] {}. {} ({}).",
        number, record.title, record.journal, record.year
    )
}

/// Append the reference list: a level-1 heading, then one line per resolved
/// placeholder in number order. Ids with no record are skipped.
pub fn append_reference_list<D: Document>(
    document: &mut D,
    library: &Library,
    style: Style,
    placeholders: &PlaceholderMap,
) {
    document.push_heading(1, style.reference_heading());

    let mut entries: Vec<(&str, usize)> = placeholders
        .iter()
        .map(|(id, number)| (id.as_str(), *number))
        .collect();
    entries.sort_by_key(|entry| entry.1);

    for (id, number) in entries {
        if let Some(record) = library.get(id) {
            document.push_paragraph(&reference_line(record, number));
        }
    }
}
