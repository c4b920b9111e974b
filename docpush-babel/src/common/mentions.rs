//! `@handle` detection.
//!
//! A mention is `@` followed by one or more word characters (Unicode letters,
//! digits, underscore). Matches are greedy and never overlap, so trailing
//! punctuation such as `@sarah:` is left outside the span.

use crate::ir::{text_len, Range};
use once_cell::sync::Lazy;
use regex::Regex;

static MENTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());

/// Spans of every mention in `text`, left to right.
///
/// Spans are relative to the start of `text` and measured in document index
/// units, ready to be offset by the insertion point.
pub fn scan(text: &str) -> Vec<Range> {
    MENTION_REGEX
        .find_iter(text)
        .map(|m| {
            let start = text_len(&text[..m.start()]);
            Range::at(start, text_len(m.as_str()))
        })
        .collect()
}
