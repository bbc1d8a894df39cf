/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Document abstraction over editable text blocks.

use std::fmt;

/// Block-addressable text the resolver can read and rewrite.
///
/// This is the full capability set the engine consumes; document parsing and
/// serialization stay with the caller. Heading blocks are ordinary text as
/// far as scanning and substitution are concerned.
pub trait Document {
    fn block_count(&self) -> usize;
    /// Text of the block at `index`; `index` must be below `block_count`.
    fn block_text(&self, index: usize) -> &str;
    fn set_block_text(&mut self, index: usize, text: String);
    /// Append a heading block at the given level.
    fn push_heading(&mut self, level: u8, text: &str);
    /// Append a body text block.
    fn push_paragraph(&mut self, text: &str);
}

/// One block of a [`PlainDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Heading { level: u8, text: String },
}

/// Blank-line-separated plain text with `#` headings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainDocument {
    blocks: Vec<Block>,
}

impl PlainDocument {
    /// Parse blank-line-separated text. A block starting with one to six
    /// `#` characters and a space becomes a heading.
    pub fn parse(input: &str) -> Self {
        let mut blocks = Vec::new();
        for chunk in input.split("\n\n") {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            blocks.push(parse_block(chunk));
        }
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

fn parse_block(chunk: &str) -> Block {
    let hashes = chunk.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) {
        if let Some(text) = chunk[hashes..].strip_prefix(' ') {
            return Block::Heading {
                level: hashes as u8,
                text: text.to_string(),
            };
        }
    }
    Block::Paragraph(chunk.to_string())
}

impl Document for PlainDocument {
    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn block_text(&self, index: usize) -> &str {
        match &self.blocks[index] {
            Block::Paragraph(text) => text,
            Block::Heading { text, .. } => text,
        }
    }

    fn set_block_text(&mut self, index: usize, new_text: String) {
        match &mut self.blocks[index] {
            Block::Paragraph(text) => *text = new_text,
            Block::Heading { text, .. } => *text = new_text,
        }
    }

    fn push_heading(&mut self, level: u8, text: &str) {
        self.blocks.push(Block::Heading {
            level,
            text: text.to_string(),
        });
    }

    fn push_paragraph(&mut self, text: &str) {
        self.blocks.push(Block::Paragraph(text.to_string()));
    }
}

impl fmt::Display for PlainDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            match block {
                Block::Paragraph(text) => write!(f, "{}", text)?,
                Block::Heading { level, text } => {
                    write!(f, "{} {}", "#".repeat(*level as usize), text)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headings_and_paragraphs() {
        let document = PlainDocument::parse("# Title\n\nFirst paragraph.\n\n## Sub\n\nSecond.");
        assert_eq!(document.block_count(), 4);
        assert_eq!(
            document.blocks()[0],
            Block::Heading {
                level: 1,
                text: "Title".to_string()
            }
        );
        assert_eq!(document.block_text(1), "First paragraph.");
        assert_eq!(
            document.blocks()[2],
            Block::Heading {
                level: 2,
                text: "Sub".to_string()
            }
        );
    }

    #[test]
    fn test_display_round_trips() {
        let input = "# Title\n\nBody text here.\n\n## Sub\n\nMore body.";
        let document = PlainDocument::parse(input);
        assert_eq!(document.to_string(), input);
    }

    #[test]
    fn hashes_without_space_stay_paragraphs() {
        let document = PlainDocument::parse("#hashtag text\n\n####### seven");
        assert_eq!(
            document.blocks()[0],
            Block::Paragraph("#hashtag text".to_string())
        );
        assert_eq!(
            document.blocks()[1],
            Block::Paragraph("####### seven".to_string())
        );
    }

    #[test]
    fn pushed_blocks_render_in_order() {
        let mut document = PlainDocument::parse("Body.");
        document.push_heading(1, "References");
        document.push_paragraph("[1] Title. Journal (1999).");
        assert_eq!(
            document.to_string(),
            "Body.\n\n# References\n\n[1] Title. Journal (1999)."
        );
    }
}
