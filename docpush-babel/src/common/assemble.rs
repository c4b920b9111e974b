//! Whole-document assembly (markdown → ordered operation batch).
//!
//! A single left-to-right pass over the lines. The only history carried from
//! line to line is the cursor and the footer flag: the first `Separator`
//! switches footer mode on for the rest of the document, there is no way back.
//! `Separator` and `Empty` lines are skipped without touching the cursor.

use super::builder::{Cursor, OperationBuilder};
use super::classify::classify;
use crate::ir::{text_len, Block, Operation};
use crate::style_rules::StyleRules;
use tracing::debug;

/// Result of one assembly run.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub operations: Vec<Operation>,
    /// Cursor after the last inserted block.
    pub cursor: Cursor,
    /// Whether a separator was seen.
    pub footer: bool,
}

/// Drives classification and emission over a whole document.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    rules: StyleRules,
}

impl DocumentAssembler {
    pub fn new(rules: StyleRules) -> Self {
        DocumentAssembler { rules }
    }

    /// Convert `source` into the ordered operation batch.
    pub fn assemble(&self, source: &str) -> Vec<Operation> {
        self.run(source).operations
    }

    /// Like [`assemble`](Self::assemble), also reporting the final cursor and
    /// footer state.
    pub fn run(&self, source: &str) -> Assembly {
        let builder = OperationBuilder::new(&self.rules);
        let mut operations = Vec::new();
        let mut cursor = Cursor::START;
        let mut footer = false;

        for (line_number, line) in source.lines().enumerate() {
            let block = classify(line);
            match block {
                Block::Separator => {
                    if !footer {
                        debug!(line = line_number + 1, "entering footer");
                    }
                    footer = true;
                    continue;
                }
                Block::Empty => continue,
                _ => {}
            }

            let emission = builder.emit(&block, cursor, footer);
            debug_assert_eq!(
                emission.cursor.index() - cursor.index(),
                inserted_len(&emission.operations),
                "cursor drifted from inserted text on line {}",
                line_number + 1
            );
            debug!(
                line = line_number + 1,
                kind = block.kind(),
                at = cursor.index(),
                operations = emission.operations.len(),
                "assembled block"
            );
            operations.extend(emission.operations);
            cursor = emission.cursor;
        }

        Assembly {
            operations,
            cursor,
            footer,
        }
    }
}

fn inserted_len(operations: &[Operation]) -> usize {
    operations
        .iter()
        .map(|op| match op {
            Operation::InsertText { text, .. } => text_len(text),
            _ => 0,
        })
        .sum()
}

/// Text of the first level-1 heading, a natural document title.
pub fn document_title(source: &str) -> Option<String> {
    source.lines().find_map(|line| match classify(line) {
        Block::Heading {
            level: crate::ir::HeadingLevel::H1,
            text,
        } if !text.is_empty() => Some(text),
        _ => None,
    })
}
