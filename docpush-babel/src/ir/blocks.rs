//! Classified input lines.

use serde::Serialize;

/// Heading depth supported by the notes grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// One markdown line after classification.
///
/// Each variant carries only the fields its kind needs. `Separator` marks the
/// start of the footer region; `Empty` never produces output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Bullet { text: String, level: usize },
    Checkbox { text: String, checked: bool },
    PlainText { text: String },
    Separator,
    Empty,
}

impl Block {
    /// Short kind name used in logs and inspect output.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Bullet { .. } => "bullet",
            Block::Checkbox { .. } => "checkbox",
            Block::PlainText { .. } => "plain-text",
            Block::Separator => "separator",
            Block::Empty => "empty",
        }
    }

    /// Whether this block can ever emit operations.
    pub fn is_content(&self) -> bool {
        !matches!(self, Block::Separator | Block::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_and_empty_are_not_content() {
        assert!(!Block::Separator.is_content());
        assert!(!Block::Empty.is_content());
        assert!(Block::PlainText {
            text: "x".to_string()
        }
        .is_content());
    }

    #[test]
    fn blocks_serialize_with_kind_tag() {
        let block = Block::Bullet {
            text: "Item".to_string(),
            level: 2,
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "bullet");
        assert_eq!(json["level"], 2);

        let json = serde_json::to_value(Block::Separator).unwrap();
        assert_eq!(json["kind"], "separator");
    }
}
