//! Format trait definition
//!
//! This module defines the core Format trait that all output formats implement.
//! A format renders an ordered operation batch into some textual representation:
//! the request body the remote service accepts, a human readable listing, or
//! the plain text the batch produces.

use crate::error::FormatError;
use crate::ir::Operation;
use std::collections::HashMap;

/// Trait for batch output formats
///
/// # Examples
///
/// ```ignore
/// struct CountFormat;
///
/// impl Format for CountFormat {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn render(&self, operations: &[Operation]) -> Result<String, FormatError> {
///         Ok(operations.len().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "batch-json", "listing")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["json"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render an operation batch
    fn render(&self, operations: &[Operation]) -> Result<String, FormatError>;

    /// Render an operation batch, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which
    /// delegates to [`Format::render`] and rejects any parameter.
    fn render_with_options(
        &self,
        operations: &[Operation],
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.render(operations)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
