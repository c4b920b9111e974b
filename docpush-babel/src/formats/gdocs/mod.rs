//! Google Docs `batchUpdate` request body.
//!
//! Each [`Operation`] maps onto exactly one request object:
//!
//! | Operation           | Request                  | `fields` mask                      |
//! |---------------------|--------------------------|------------------------------------|
//! | `InsertText`        | `insertText`             | n/a                                |
//! | `SetParagraphStyle` | `updateParagraphStyle`   | `namedStyleType` or indents        |
//! | `SetTextStyle`      | `updateTextStyle`        | set attributes, e.g. `bold,...`    |
//! | `SetBulletList`     | `createParagraphBullets` | n/a                                |
//!
//! The output is posted verbatim, in order, as one atomic batch.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::{Operation, ParagraphStyle, Range, RgbColor, TextStyle};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Renders the `{"requests": [...]}` body of a `batchUpdate` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchJsonFormat;

impl Format for BatchJsonFormat {
    fn name(&self) -> &str {
        "batch-json"
    }

    fn description(&self) -> &str {
        "Google Docs batchUpdate request body"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn render(&self, operations: &[Operation]) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&batch_request(operations))?)
    }

    fn render_with_options(
        &self,
        operations: &[Operation],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut compact = false;
        for (key, value) in options {
            match key.as_str() {
                "compact" => compact = value == "true",
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'batch-json' has no option '{other}'"
                    )))
                }
            }
        }
        let body = batch_request(operations);
        if compact {
            Ok(serde_json::to_string(&body)?)
        } else {
            Ok(serde_json::to_string_pretty(&body)?)
        }
    }
}

/// Request body of a `documents.create` call.
pub fn create_request(title: &str) -> Value {
    json!({ "title": title })
}

/// Full `batchUpdate` request body for `operations`.
pub fn batch_request(operations: &[Operation]) -> Value {
    json!({ "requests": operations.iter().map(request).collect::<Vec<_>>() })
}

/// The request object for a single operation.
pub fn request(op: &Operation) -> Value {
    match op {
        Operation::InsertText { at, text } => json!({
            "insertText": {
                "location": { "index": at },
                "text": text,
            }
        }),
        Operation::SetParagraphStyle { range, style } => json!({
            "updateParagraphStyle": {
                "range": range_json(range),
                "paragraphStyle": paragraph_style_json(style),
                "fields": style.fields(),
            }
        }),
        Operation::SetTextStyle { range, style } => json!({
            "updateTextStyle": {
                "range": range_json(range),
                "textStyle": text_style_json(style),
                "fields": style.fields(),
            }
        }),
        Operation::SetBulletList { range, preset } => json!({
            "createParagraphBullets": {
                "range": range_json(range),
                "bulletPreset": preset,
            }
        }),
    }
}

fn range_json(range: &Range) -> Value {
    json!({ "startIndex": range.start, "endIndex": range.end })
}

fn paragraph_style_json(style: &ParagraphStyle) -> Value {
    match style {
        ParagraphStyle::Named(named) => json!({ "namedStyleType": named.as_str() }),
        ParagraphStyle::Indent { start, first_line } => json!({
            "indentStart": { "magnitude": start, "unit": "PT" },
            "indentFirstLine": { "magnitude": first_line, "unit": "PT" },
        }),
    }
}

fn text_style_json(style: &TextStyle) -> Value {
    let mut map = Map::new();
    if let Some(bold) = style.bold {
        map.insert("bold".to_string(), Value::Bool(bold));
    }
    if let Some(italic) = style.italic {
        map.insert("italic".to_string(), Value::Bool(italic));
    }
    if let Some(color) = style.foreground {
        map.insert("foregroundColor".to_string(), color_json(&color));
    }
    Value::Object(map)
}

fn color_json(color: &RgbColor) -> Value {
    json!({
        "color": {
            "rgbColor": {
                "red": color.red,
                "green": color.green,
                "blue": color.blue,
            }
        }
    })
}
