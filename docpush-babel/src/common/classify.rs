//! Line classification (markdown line → [`Block`]).
//!
//! Every line is classified on its own: the result depends only on the line's
//! content and its leading whitespace, never on neighbouring lines. Footer
//! handling, which does depend on history, belongs to the assembler.
//!
//! Prefixes overlap, so the checks run in a fixed order and the first match
//! wins:
//!
//! | Order | Test (on the left-trimmed line)      | Block                 |
//! |-------|--------------------------------------|-----------------------|
//! | 1     | trimmed content starts with `---`    | `Separator`           |
//! | 2     | trimmed content is empty             | `Empty`               |
//! | 3     | `# ` but not `## `                   | `Heading(H1)`         |
//! | 4     | `### `                               | `Heading(H3)`         |
//! | 5     | `## `                                | `Heading(H2)`         |
//! | 6     | `- [ ] `                             | `Checkbox(unchecked)` |
//! | 7     | `- [x] ` / `- [X] `                  | `Checkbox(checked)`   |
//! | 8     | `* ` / `- `                          | `Bullet`              |
//! | 9     | anything else                        | `PlainText`           |
//!
//! Bullet nesting is the leading whitespace count divided by [`INDENT_WIDTH`],
//! rounded down, so three spaces is level 1.

use crate::ir::{Block, HeadingLevel};

/// Leading whitespace characters per bullet nesting level.
pub const INDENT_WIDTH: usize = 2;

const UNCHECKED_PREFIX: &str = "- [ ] ";
const CHECKED_PREFIXES: &[&str] = &["- [x] ", "- [X] "];
const BULLET_PREFIXES: &[&str] = &["* ", "- "];

/// Classify one raw input line. Never fails.
pub fn classify(line: &str) -> Block {
    let stripped = line.trim_start();
    let indent = leading_whitespace(line, stripped);
    let trimmed = stripped.trim_end();

    if trimmed.starts_with("---") {
        return Block::Separator;
    }
    if trimmed.is_empty() {
        return Block::Empty;
    }

    if let Some(rest) = stripped.strip_prefix("# ") {
        if !stripped.starts_with("## ") {
            return heading(HeadingLevel::H1, rest);
        }
    }
    if let Some(rest) = stripped.strip_prefix("### ") {
        return heading(HeadingLevel::H3, rest);
    }
    if let Some(rest) = stripped.strip_prefix("## ") {
        return heading(HeadingLevel::H2, rest);
    }

    if let Some(rest) = stripped.strip_prefix(UNCHECKED_PREFIX) {
        return Block::Checkbox {
            text: rest.trim().to_string(),
            checked: false,
        };
    }
    if let Some(rest) = strip_any(stripped, CHECKED_PREFIXES) {
        return Block::Checkbox {
            text: rest.trim().to_string(),
            checked: true,
        };
    }
    if let Some(rest) = strip_any(stripped, BULLET_PREFIXES) {
        return Block::Bullet {
            text: rest.trim().to_string(),
            level: indent / INDENT_WIDTH,
        };
    }

    Block::PlainText {
        text: trimmed.to_string(),
    }
}

/// Classify every line of `source`, in order.
///
/// Both `\n` and `\r\n` terminate a line.
pub fn classify_lines(source: &str) -> Vec<Block> {
    source.lines().map(classify).collect()
}

fn heading(level: HeadingLevel, rest: &str) -> Block {
    Block::Heading {
        level,
        text: rest.trim().to_string(),
    }
}

fn strip_any<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| line.strip_prefix(prefix))
}

fn leading_whitespace(line: &str, stripped: &str) -> usize {
    line[..line.len() - stripped.len()].chars().count()
}
