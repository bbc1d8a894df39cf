/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors surfaced by the processor.
///
/// Parsing and placeholder resolution are total and never error; only the
/// persistence layer can fail.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("parse error in {path} at line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ProcessorError {
    fn from(e: serde_json::Error) -> Self {
        ProcessorError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
