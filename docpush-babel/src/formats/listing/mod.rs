//! Listing formatter for operation batches
//!
//! One line per operation, in batch order:
//!
//! <index> <kind> <range> <detail>
//!
//! Example:
//!
//!   0  insert-text          [1, 7)    "Title\n"
//!   1  set-paragraph-style  [1, 6)    HEADING_1
//!   2  insert-text          [7, 19)   "☐ call @sam\n"
//!   3  set-text-style       [14, 18)  bold rgb(0.2, 0.4, 0.8)
//!
//! For inserts the range is the interval the text occupies once inserted.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::{Operation, ParagraphStyle, TextStyle};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListingFormat;

impl Format for ListingFormat {
    fn name(&self) -> &str {
        "listing"
    }

    fn description(&self) -> &str {
        "One human readable line per operation"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ops"]
    }

    fn render(&self, operations: &[Operation]) -> Result<String, FormatError> {
        Ok(to_listing(operations))
    }
}

pub fn to_listing(operations: &[Operation]) -> String {
    let mut out = String::new();
    for (index, op) in operations.iter().enumerate() {
        out.push_str(&format_line(index, op));
        out.push('\n');
    }
    out
}

fn format_line(index: usize, op: &Operation) -> String {
    format!(
        "{index:>3}  {kind:<19}  {range:<8}  {detail}",
        kind = op.kind(),
        range = op.range().to_string(),
        detail = detail(op)
    )
}

fn detail(op: &Operation) -> String {
    match op {
        Operation::InsertText { text, .. } => format!("{text:?}"),
        Operation::SetParagraphStyle { style, .. } => match style {
            ParagraphStyle::Named(named) => named.as_str().to_string(),
            ParagraphStyle::Indent { start, first_line } => {
                format!("indent start={start}pt first-line={first_line}pt")
            }
        },
        Operation::SetTextStyle { style, .. } => text_style_detail(style),
        Operation::SetBulletList { preset, .. } => preset.clone(),
    }
}

fn text_style_detail(style: &TextStyle) -> String {
    let mut parts = Vec::new();
    if style.bold == Some(true) {
        parts.push("bold".to_string());
    }
    if style.italic == Some(true) {
        parts.push("italic".to_string());
    }
    if let Some(color) = style.foreground {
        parts.push(format!(
            "rgb({}, {}, {})",
            color.red, color.green, color.blue
        ));
    }
    parts.join(" ")
}
