use crate::ir::RgbColor;

/// Styling knobs for the operation builder.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRules {
    /// Foreground colour of `@mentions` (rendered bold)
    pub mention_color: RgbColor,

    /// Foreground colour of footer lines (rendered italic)
    pub footer_color: RgbColor,

    /// Remote bullet preset applied to bullet paragraphs
    pub bullet_preset: String,

    /// Start indent, in points, added per nesting level of a bullet
    pub indent_per_level: f64,

    /// First-line indent, in points, of nested bullets
    pub first_line_indent: f64,

    /// Symbol prefixed to checked checklist items
    pub checked_symbol: String,

    /// Symbol prefixed to open checklist items
    pub unchecked_symbol: String,
}

impl StyleRules {
    pub fn checkbox_symbol(&self, checked: bool) -> &str {
        if checked {
            &self.checked_symbol
        } else {
            &self.unchecked_symbol
        }
    }
}

impl Default for StyleRules {
    fn default() -> Self {
        Self {
            mention_color: RgbColor::new(0.2, 0.4, 0.8),
            footer_color: RgbColor::new(0.5, 0.5, 0.5),
            bullet_preset: "BULLET_DISC_CIRCLE_SQUARE".to_string(),
            indent_per_level: 36.0,
            first_line_indent: 18.0,
            checked_symbol: "☑".to_string(),
            unchecked_symbol: "☐".to_string(),
        }
    }
}
