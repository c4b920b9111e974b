//! Plain text produced by a batch.
//!
//! Replays the batch on a [`SimulatedDocument`](crate::common::SimulatedDocument)
//! and prints the resulting body. A batch whose indices do not line up fails to
//! render instead of producing garbled text.

use crate::common::replay;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::Operation;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Document body text after the batch is applied"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn render(&self, operations: &[Operation]) -> Result<String, FormatError> {
        Ok(replay(operations)?)
    }
}
