//! Positional edit operations.
//!
//! An [`Operation`] is one request against the remote document body. Indices
//! are absolute and assume every earlier operation in the batch has already
//! been applied, so a batch is only meaningful in order.

use serde::Serialize;
use std::fmt;

/// Half-open `[start, end)` interval in document index units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Range { start, end }
    }

    /// Interval of `len` units starting at `start`.
    pub fn at(start: usize, len: usize) -> Self {
        Range {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Shift both ends right by `offset`.
    pub fn offset(self, offset: usize) -> Self {
        Range {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbColor {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        RgbColor { red, green, blue }
    }
}

/// Built-in paragraph styles of the remote document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NamedStyle {
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
}

impl NamedStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            NamedStyle::Heading1 => "HEADING_1",
            NamedStyle::Heading2 => "HEADING_2",
            NamedStyle::Heading3 => "HEADING_3",
        }
    }
}

/// Paragraph-level formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphStyle {
    /// Apply a named style (headings).
    Named(NamedStyle),
    /// Indent the paragraph; magnitudes are in points.
    Indent { start: f64, first_line: f64 },
}

impl ParagraphStyle {
    /// Field mask naming exactly the properties this style sets.
    pub fn fields(&self) -> &'static str {
        match self {
            ParagraphStyle::Named(_) => "namedStyleType",
            ParagraphStyle::Indent { .. } => "indentStart,indentFirstLine",
        }
    }
}

/// Character-level formatting. Unset attributes are left untouched remotely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<RgbColor>,
}

impl TextStyle {
    /// Bold in the given colour, used for `@mentions`.
    pub fn emphasis(color: RgbColor) -> Self {
        TextStyle {
            bold: Some(true),
            italic: None,
            foreground: Some(color),
        }
    }

    /// Italic in the given colour, used for footer lines.
    pub fn subdued(color: RgbColor) -> Self {
        TextStyle {
            bold: None,
            italic: Some(true),
            foreground: Some(color),
        }
    }

    /// Comma separated field mask, e.g. `bold,foregroundColor`.
    pub fn fields(&self) -> String {
        let mut fields = Vec::new();
        if self.bold.is_some() {
            fields.push("bold");
        }
        if self.italic.is_some() {
            fields.push("italic");
        }
        if self.foreground.is_some() {
            fields.push("foregroundColor");
        }
        fields.join(",")
    }
}

/// One positional edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    InsertText { at: usize, text: String },
    SetParagraphStyle { range: Range, style: ParagraphStyle },
    SetTextStyle { range: Range, style: TextStyle },
    SetBulletList { range: Range, preset: String },
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::InsertText { .. } => "insert-text",
            Operation::SetParagraphStyle { .. } => "set-paragraph-style",
            Operation::SetTextStyle { .. } => "set-text-style",
            Operation::SetBulletList { .. } => "set-bullet-list",
        }
    }

    /// The range an operation touches. For inserts this is the interval the
    /// new text occupies once inserted.
    pub fn range(&self) -> Range {
        match self {
            Operation::InsertText { at, text } => Range::at(*at, super::text_len(text)),
            Operation::SetParagraphStyle { range, .. }
            | Operation::SetTextStyle { range, .. }
            | Operation::SetBulletList { range, .. } => *range,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Operation::InsertText { .. })
    }
}
