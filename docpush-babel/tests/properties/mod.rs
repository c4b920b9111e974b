//! Property-based tests over generated notes.

mod batch;
