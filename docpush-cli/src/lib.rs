//! Library half of the docpush command line tool.
//!
//! Holds the pieces of the CLI that are worth testing without spawning the
//! binary. Everything else lives in `main.rs`.

pub mod transforms;
