/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Line-delimited JSON persistence for the record library.
//!
//! One record per line. Non-ASCII text is written as UTF-8, not escaped, so
//! the files stay readable and diffable.

use std::fs;
use std::path::Path;

use refmark_core::library::Library;
use refmark_core::record::CitationRecord;

use crate::error::{ProcessorError, Result};

/// Load a library from a JSON-lines file.
///
/// Blank lines are skipped; a malformed line aborts the load, naming the
/// file and line number. The id counter is recovered from the highest
/// `refNNN` id present.
pub fn load_library(path: &Path) -> Result<Library> {
    let content = fs::read_to_string(path)?;
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: CitationRecord =
            serde_json::from_str(line).map_err(|e| ProcessorError::Parse {
                path: path.display().to_string(),
                line: index + 1,
                message: e.to_string(),
            })?;
        records.push(record);
    }

    Ok(Library::from_records(records))
}

/// Write the library, one record per line, in library order.
pub fn save_library(path: &Path, library: &Library) -> Result<()> {
    let mut out = String::new();
    for record in library.iter() {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use refmark_core::record::Author;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("refmark-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut library = Library::new();
        library.add(CitationRecord {
            authors: vec![Author::new("Müller", "A.")],
            title: "Verteilte Systeme".to_string(),
            year: "2010".to_string(),
            ..Default::default()
        });
        library.add(CitationRecord {
            title: "参考文献の研究".to_string(),
            ..Default::default()
        });

        let path = scratch_path("round-trip.jsonl");
        save_library(&path, &library).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        // UTF-8 stays raw on disk.
        assert!(content.contains("Müller"));
        assert!(content.contains("参考文献の研究"));

        let reloaded = load_library(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(
            reloaded.get("ref001").map(|r| r.title.as_str()),
            Some("Verteilte Systeme")
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let path = scratch_path("blank-lines.jsonl");
        fs::write(
            &path,
            "{\"id\":\"ref001\",\"title\":\"One\"}\n\n{\"id\":\"ref002\",\"title\":\"Two\"}\n",
        )
        .unwrap();

        let library = load_library(&path).unwrap();
        assert_eq!(library.len(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let path = scratch_path("malformed.jsonl");
        fs::write(&path, "{\"id\":\"ref001\"}\nnot json\n").unwrap();

        let err = load_library(&path).unwrap_err();
        match err {
            ProcessorError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn counter_resumes_after_load() {
        let path = scratch_path("counter.jsonl");
        fs::write(&path, "{\"id\":\"ref009\",\"title\":\"Nine\"}\n").unwrap();

        let mut library = load_library(&path).unwrap();
        assert_eq!(library.add_empty(), "ref010");

        fs::remove_file(&path).unwrap();
    }
}
