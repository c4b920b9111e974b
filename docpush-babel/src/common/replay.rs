//! Local replay of an operation batch.
//!
//! [`SimulatedDocument`] mimics the remote body closely enough to validate a
//! batch before it is sent: a fresh document holds only its terminating line
//! break, index 0 is the implicit start, inserts must land inside the body and
//! style ranges must not reach past its end. Applying the batch in order
//! yields the plain text the remote document will end up with.
//!
//! The body is kept in UTF-16 code units, the same unit the indices use.

use crate::ir::{Operation, Range};
use thiserror::Error;

/// Batch validation failures, each pointing at the offending operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("operation {index}: insert at {at} is outside the body (valid: 1..={end})")]
    InsertOutOfBounds { index: usize, at: usize, end: usize },
    #[error("operation {index}: range {range} is outside the body [1, {end})")]
    RangeOutOfBounds {
        index: usize,
        range: Range,
        end: usize,
    },
    #[error("operation {index}: range {range} ends before it starts")]
    InvertedRange { index: usize, range: Range },
}

/// In-memory stand-in for the remote document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedDocument {
    body: Vec<u16>,
    styled: usize,
}

impl SimulatedDocument {
    pub fn new() -> Self {
        SimulatedDocument {
            body: vec![u16::from(b'\n')],
            styled: 0,
        }
    }

    /// Index one past the terminating line break.
    pub fn end_index(&self) -> usize {
        self.body.len() + 1
    }

    /// Number of style operations applied so far.
    pub fn styled(&self) -> usize {
        self.styled
    }

    /// Apply one operation; `index` is its position in the batch.
    pub fn apply(&mut self, index: usize, op: &Operation) -> Result<(), ReplayError> {
        match op {
            Operation::InsertText { at, text } => {
                // Text can only go before the terminating line break.
                let end = self.end_index() - 1;
                if *at < 1 || *at > end {
                    return Err(ReplayError::InsertOutOfBounds {
                        index,
                        at: *at,
                        end,
                    });
                }
                let offset = at - 1;
                self.body.splice(offset..offset, text.encode_utf16());
            }
            Operation::SetParagraphStyle { range, .. }
            | Operation::SetTextStyle { range, .. }
            | Operation::SetBulletList { range, .. } => {
                self.check_range(index, *range)?;
                self.styled += 1;
            }
        }
        Ok(())
    }

    /// Apply a whole batch in order, stopping at the first invalid operation.
    pub fn apply_all(&mut self, operations: &[Operation]) -> Result<(), ReplayError> {
        operations
            .iter()
            .enumerate()
            .try_for_each(|(index, op)| self.apply(index, op))
    }

    /// Body text without the terminating line break.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.body[..self.body.len() - 1])
    }

    fn check_range(&self, index: usize, range: Range) -> Result<(), ReplayError> {
        if range.end < range.start {
            return Err(ReplayError::InvertedRange { index, range });
        }
        let end = self.end_index();
        if range.start < 1 || range.end > end {
            return Err(ReplayError::RangeOutOfBounds { index, range, end });
        }
        Ok(())
    }
}

impl Default for SimulatedDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay `operations` on a fresh document and return its text.
pub fn replay(operations: &[Operation]) -> Result<String, ReplayError> {
    let mut doc = SimulatedDocument::new();
    doc.apply_all(operations)?;
    Ok(doc.text())
}
