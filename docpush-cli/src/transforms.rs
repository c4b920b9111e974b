//! CLI-specific transforms
//!
//! This module defines all the views available to `docpush inspect`.
//! Each transform is a stage + format combination (e.g., "blocks-simple", "ops-json").
//!
//! ## Transform Pipeline
//!
//! Conversion has two stages:
//!
//! 1. **Classification** - Raw lines → Blocks
//!    - `blocks-simple`: one line per input line, kind and payload
//!    - `blocks-json`: the classified blocks as JSON
//!
//! 2. **Assembly** - Blocks → ordered operation batch
//!    - `ops-json`: the operations as JSON
//!    - `ops-listing`: one aligned line per operation
//!
//! ## Extra Parameters
//!
//! - `show-linum`: "false" drops the line numbers from `blocks-simple`
//!   (defaults to "true")
//!
//! Example: `docpush inspect notes.md blocks-simple --extra-show-linum false`

use docpush_babel::common::DocumentAssembler;
use docpush_babel::formats::listing::to_listing;
use docpush_babel::ir::Block;
use docpush_babel::{to_blocks, StyleRules};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] =
    &["blocks-simple", "blocks-json", "ops-json", "ops-listing"];

/// Transform used when none is given.
pub const DEFAULT_TRANSFORM: &str = "blocks-simple";

/// Execute a named transform on a source file with optional extra parameters
///
/// # Arguments
///
/// * `source` - The markdown text to transform
/// * `transform_name` - The transform to apply (e.g., "ops-listing")
/// * `rules` - Styling used when assembling operations
/// * `extra_params` - Optional parameters for the transform
///
/// # Examples
///
/// ```ignore
/// let output = execute_transform("# Title", "ops-json", &StyleRules::default(), &HashMap::new())?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    rules: &StyleRules,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "blocks-simple" => {
            let show_linum = extra_params
                .get("show-linum")
                .map(|value| value != "false")
                .unwrap_or(true);
            Ok(blocks_to_simple(&to_blocks(source), show_linum))
        }
        "blocks-json" => serde_json::to_string_pretty(&to_blocks(source))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "ops-json" => {
            let ops = DocumentAssembler::new(rules.clone()).assemble(source);
            serde_json::to_string_pretty(&ops)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "ops-listing" => {
            let ops = DocumentAssembler::new(rules.clone()).assemble(source);
            Ok(to_listing(&ops))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn blocks_to_simple(blocks: &[Block], show_linum: bool) -> String {
    let mut output = String::new();
    for (index, block) in blocks.iter().enumerate() {
        if show_linum {
            output.push_str(&format!("{:>3}  ", index + 1));
        }
        output.push_str(&describe(block));
        output.push('\n');
    }
    output
}

fn describe(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("heading h{} {text:?}", level.number()),
        Block::Bullet { text, level } => format!("bullet level={level} {text:?}"),
        Block::Checkbox { text, checked } => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            format!("checkbox {mark} {text:?}")
        }
        Block::PlainText { text } => format!("plain-text {text:?}"),
        Block::Separator => "separator".to_string(),
        Block::Empty => "empty".to_string(),
    }
}
