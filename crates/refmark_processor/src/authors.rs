//! Author-list segmentation.
//!
//! Splits strings like `"Smith, J.; Doe, A."` or `"J. Smith and A. Doe"`
//! into ordered family/given pairs. Heuristic by design: separators are
//! rewritten to `;`, and a segment is split either at its first comma or at
//! its last whitespace token.

use refmark_core::record::Author;

/// Parse an author list into family/given pairs, preserving order.
///
/// Segments that clean down to nothing (stray separators, punctuation runs)
/// are discarded; everything else yields exactly one author.
pub fn parse_author_list(text: &str) -> Vec<Author> {
    let unified = text
        .replace(" and ", ";")
        .replace(" & ", ";")
        .replace('；', ";");

    let mut authors = Vec::new();
    for segment in unified.split(';') {
        let cleaned = clean_segment(segment);
        if cleaned.is_empty() {
            continue;
        }
        authors.push(split_name(cleaned));
    }
    authors
}

/// Trim whitespace and commas from both ends, plus trailing periods that do
/// not close a one-letter initial. "Smith, J.," cleans to "Smith, J." while
/// "J. Smith." cleans to "J. Smith".
fn clean_segment(segment: &str) -> &str {
    let mut current = segment;
    loop {
        let trimmed = current.trim_matches(|c: char| c.is_whitespace() || c == ',');
        let stripped = match trimmed.strip_suffix('.') {
            Some(rest) if !ends_with_initial(trimmed) => rest,
            _ => trimmed,
        };
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}

/// True when the string ends in a one-letter initial like "J." or "R.".
fn ends_with_initial(s: &str) -> bool {
    let mut chars = s.chars().rev();
    if chars.next() != Some('.') {
        return false;
    }
    match chars.next() {
        Some(letter) if letter.is_alphabetic() => match chars.next() {
            Some(previous) => !previous.is_alphabetic(),
            None => true,
        },
        _ => false,
    }
}

fn split_name(cleaned: &str) -> Author {
    // "Family, Given": split at the first comma only.
    if let Some((family, given)) = cleaned.split_once(',') {
        return Author::new(family.trim(), given.trim());
    }

    // "Given Family": last token is the family name.
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let family = tokens.pop().unwrap_or(cleaned);
    Author::new(family, &tokens.join(" "))
}
