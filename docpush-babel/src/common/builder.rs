//! Operation emission for a single block.
//!
//! The remote document is built by sequential positional inserts, so the
//! builder works from an explicit [`Cursor`]: every call receives the index the
//! block's text will be inserted at and returns the index right after it.
//! Nothing is mutated in between, which keeps the offset invariant checkable
//! per call:
//!
//! ```text
//! cursor_out - cursor_in == text_len(inserted text)
//! ```
//!
//! Per block the output is exactly one `InsertText` followed by the style
//! operations for that text, all of whose ranges lie inside the inserted
//! interval. The trailing line break is part of the insert but only bullet
//! ranges cover it (bullets are paragraph-scoped).

use super::mentions;
use crate::ir::{
    text_len, Block, HeadingLevel, NamedStyle, Operation, ParagraphStyle, Range, TextStyle,
};
use crate::style_rules::StyleRules;
use tracing::trace;

/// Insertion point in the remote document body.
///
/// Index 0 is the implicit document start, so a fresh conversion begins at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub const START: Cursor = Cursor(1);

    pub fn index(self) -> usize {
        self.0
    }

    fn advance(self, len: usize) -> Cursor {
        Cursor(self.0 + len)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::START
    }
}

/// Operations for one block plus the cursor to continue from.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub operations: Vec<Operation>,
    pub cursor: Cursor,
}

/// Emits operations for classified blocks according to a set of [`StyleRules`].
#[derive(Debug, Clone, Copy)]
pub struct OperationBuilder<'a> {
    rules: &'a StyleRules,
}

impl<'a> OperationBuilder<'a> {
    pub fn new(rules: &'a StyleRules) -> Self {
        OperationBuilder { rules }
    }

    /// Emit the operations for `block` inserted at `cursor`.
    ///
    /// `footer` selects attribution styling for plain text. `Separator` and
    /// `Empty` blocks emit nothing and leave the cursor where it was.
    pub fn emit(&self, block: &Block, cursor: Cursor, footer: bool) -> Emission {
        let emission = match block {
            Block::Heading { level, text } => self.heading(*level, text, cursor),
            Block::PlainText { text } if footer => self.footer_text(text, cursor),
            Block::PlainText { text } => self.body_text(text, cursor),
            Block::Bullet { text, level } => self.bullet(text, *level, cursor),
            Block::Checkbox { text, checked } => self.checkbox(text, *checked, cursor),
            Block::Separator | Block::Empty => Emission {
                operations: Vec::new(),
                cursor,
            },
        };
        trace!(
            kind = block.kind(),
            from = cursor.index(),
            to = emission.cursor.index(),
            operations = emission.operations.len(),
            "emitted block"
        );
        emission
    }

    fn heading(&self, level: HeadingLevel, text: &str, cursor: Cursor) -> Emission {
        let at = cursor.index();
        let len = text_len(text);
        let operations = vec![
            insert_line(at, text),
            Operation::SetParagraphStyle {
                range: Range::at(at, len),
                style: ParagraphStyle::Named(heading_style(level)),
            },
        ];
        Emission {
            operations,
            cursor: cursor.advance(len + 1),
        }
    }

    fn body_text(&self, text: &str, cursor: Cursor) -> Emission {
        let at = cursor.index();
        let mut operations = vec![insert_line(at, text)];
        operations.extend(self.mention_styles(text, at));
        Emission {
            operations,
            cursor: cursor.advance(text_len(text) + 1),
        }
    }

    // Footer lines are free-form attribution: the whole line is subdued and
    // mentions get no emphasis of their own.
    fn footer_text(&self, text: &str, cursor: Cursor) -> Emission {
        let at = cursor.index();
        let len = text_len(text);
        let operations = vec![
            insert_line(at, text),
            Operation::SetTextStyle {
                range: Range::at(at, len),
                style: TextStyle::subdued(self.rules.footer_color),
            },
        ];
        Emission {
            operations,
            cursor: cursor.advance(len + 1),
        }
    }

    fn bullet(&self, text: &str, level: usize, cursor: Cursor) -> Emission {
        let at = cursor.index();
        let paragraph = Range::at(at, text_len(text) + 1);
        let mut operations = vec![
            insert_line(at, text),
            Operation::SetBulletList {
                range: paragraph,
                preset: self.rules.bullet_preset.clone(),
            },
        ];
        if level > 0 {
            operations.push(Operation::SetParagraphStyle {
                range: paragraph,
                style: ParagraphStyle::Indent {
                    start: self.rules.indent_per_level * level as f64,
                    first_line: self.rules.first_line_indent,
                },
            });
        }
        Emission {
            operations,
            cursor: cursor.advance(paragraph.len()),
        }
    }

    fn checkbox(&self, text: &str, checked: bool, cursor: Cursor) -> Emission {
        let at = cursor.index();
        let symbol = self.rules.checkbox_symbol(checked);
        let line = format!("{symbol} {text}\n");
        let text_start = at + text_len(symbol) + 1;

        let mut operations = vec![Operation::InsertText {
            at,
            text: line.clone(),
        }];
        operations.extend(self.mention_styles(text, text_start));
        Emission {
            operations,
            cursor: cursor.advance(text_len(&line)),
        }
    }

    fn mention_styles(&self, text: &str, text_start: usize) -> Vec<Operation> {
        let style = TextStyle::emphasis(self.rules.mention_color);
        mentions::scan(text)
            .into_iter()
            .map(|span| Operation::SetTextStyle {
                range: span.offset(text_start),
                style,
            })
            .collect()
    }
}

fn insert_line(at: usize, text: &str) -> Operation {
    Operation::InsertText {
        at,
        text: format!("{text}\n"),
    }
}

fn heading_style(level: HeadingLevel) -> NamedStyle {
    match level {
        HeadingLevel::H1 => NamedStyle::Heading1,
        HeadingLevel::H2 => NamedStyle::Heading2,
        HeadingLevel::H3 => NamedStyle::Heading3,
    }
}
