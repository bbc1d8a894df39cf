/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation style selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric citation style family.
///
/// Both families currently share one rendering; the renderer matches them in
/// a single explicit arm so any divergence has to be written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericStyle {
    /// GB/T 7714, the Chinese national standard.
    Gbt7714,
    Ieee,
}

/// How inline citations and the reference list are formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Parenthetical author-year citations, APA 7th style.
    #[default]
    NameYear,
    /// Bracketed sequence numbers: `[1]`.
    Numeric(NumericStyle),
}

impl Style {
    /// Look up a style by its user-facing name. Accepts the short CLI names
    /// plus a few aliases; case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "apa7" | "apa" | "name-year" => Some(Style::NameYear),
            "gbt" | "gbt7714" | "gb/t 7714" => Some(Style::Numeric(NumericStyle::Gbt7714)),
            "ieee" => Some(Style::Numeric(NumericStyle::Ieee)),
            _ => None,
        }
    }

    /// Heading label for the appended reference list.
    pub fn reference_heading(&self) -> &'static str {
        match self {
            Style::NameYear => "References",
            Style::Numeric(_) => "参考文献",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::NameYear => write!(f, "apa7"),
            Style::Numeric(NumericStyle::Gbt7714) => write!(f, "gbt"),
            Style::Numeric(NumericStyle::Ieee) => write!(f, "ieee"),
        }
    }
}
