//! Intermediate Representation (IR) for docpush conversions.
//!
//! Two closed vocabularies live here: [`blocks::Block`], the classified form of a
//! single input line, and [`operations::Operation`], the positional edit the
//! remote document receives. Everything between the two is in `common`.

pub mod blocks;
pub mod operations;

pub use blocks::{Block, HeadingLevel};
pub use operations::{NamedStyle, Operation, ParagraphStyle, Range, RgbColor, TextStyle};

/// Length of `text` in document index units.
///
/// The remote document addresses its body in UTF-16 code units, so that is
/// the unit every cursor advance and every range is expressed in. For text in
/// the Basic Multilingual Plane (which includes the checkbox symbols) this is
/// the same as the character count.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_length_is_char_count() {
        assert_eq!(text_len("Title"), 5);
        assert_eq!(text_len(""), 0);
    }

    #[test]
    fn checkbox_symbols_are_one_unit() {
        assert_eq!(text_len("☐"), 1);
        assert_eq!(text_len("☑"), 1);
    }

    #[test]
    fn astral_characters_take_two_units() {
        assert_eq!(text_len("🚀"), 2);
        assert_eq!(text_len("go 🚀"), 5);
    }
}
