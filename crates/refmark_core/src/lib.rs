/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for the refmark bibliography tools.
//!
//! This crate defines the bibliographic record, the citation style selector,
//! and the library that owns records and hands out their ids. It carries no
//! parsing or rendering logic; that lives in `refmark_processor`.

pub mod library;
pub mod record;
pub mod style;

pub use library::Library;
pub use record::{Author, CitationRecord};
pub use style::{NumericStyle, Style};
