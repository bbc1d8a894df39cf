/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! refmark processor
//!
//! This crate turns free-text citations into structured records and rewrites
//! documents that cite them. The parsing side is a three-stage cascade that
//! never fails; the document side numbers `[id:...]` placeholders in
//! first-appearance order, substitutes rendered citations, and appends a
//! reference list. Persistence is line-delimited JSON.
//!
//! # Example
//!
//! ```rust
//! use refmark_core::{library::Library, style::Style};
//! use refmark_processor::render::append_reference_list;
//! use refmark_processor::{CitationParser, PlaceholderResolver, PlainDocument};
//!
//! let parser = CitationParser::default();
//! let mut library = Library::new();
//! let id = library.add(parser.parse("Reeves, C. R. (1995). Genetic algorithms. Engineering."));
//!
//! let mut document = PlainDocument::parse(&format!("As shown in [id:{}].", id));
//! let resolver = PlaceholderResolver::default();
//! let placeholders = resolver.resolve(&mut document, &library, Style::NameYear);
//! append_reference_list(&mut document, &library, Style::NameYear, &placeholders);
//!
//! assert!(document.to_string().starts_with("As shown in (Reeves, 1995)."));
//! ```

pub mod authors;
pub mod document;
pub mod error;
pub mod extract;
pub mod io;
pub mod parse;
pub mod render;
pub mod resolver;

pub use authors::parse_author_list;
pub use document::{Block, Document, PlainDocument};
pub use error::ProcessorError;
pub use extract::PatternExtractor;
pub use parse::CitationParser;
pub use resolver::{PlaceholderMap, PlaceholderResolver};
