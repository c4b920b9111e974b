//! Source-level entry points
//!
//! Thin functional wrappers over the assembler and the format registry, for
//! callers that start from markdown text rather than from an operation batch.

use crate::common::classify::classify_lines;
use crate::common::DocumentAssembler;
use crate::error::FormatError;
use crate::ir::{Block, Operation};
use crate::registry::FormatRegistry;
use crate::style_rules::StyleRules;
use std::collections::HashMap;

/// Classify every line of `source`.
///
/// # Example
///
/// ```ignore
/// let blocks = to_blocks("# Title\n- item");
/// assert_eq!(blocks.len(), 2);
/// ```
pub fn to_blocks(source: &str) -> Vec<Block> {
    classify_lines(source)
}

/// Assemble the ordered operation batch for `source`.
pub fn to_operations(source: &str, rules: &StyleRules) -> Vec<Operation> {
    DocumentAssembler::new(rules.clone()).assemble(source)
}

/// Assemble `source` and render the batch with the named format.
pub fn render(
    source: &str,
    format: &str,
    rules: &StyleRules,
    options: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let registry = FormatRegistry::default();
    // Fail on an unknown format before doing any work
    let format = registry.get(format)?;
    format.render_with_options(&to_operations(source, rules), options)
}
