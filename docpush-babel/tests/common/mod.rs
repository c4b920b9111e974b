//! Shared helpers for the integration tests.

use docpush_babel::common::SimulatedDocument;
use docpush_babel::ir::{Operation, Range};

/// Loads a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {path}: {err}"))
}

/// Replays `operations` and returns the body text.
pub fn replayed(operations: &[Operation]) -> String {
    let mut doc = SimulatedDocument::new();
    doc.apply_all(operations).expect("batch should replay");
    doc.text()
}

/// The text a range covers in a replayed body. Indices are 1-based UTF-16 units.
pub fn covered(body: &str, range: Range) -> String {
    let units: Vec<u16> = body.encode_utf16().collect();
    String::from_utf16_lossy(&units[range.start - 1..range.end - 1])
}
