//! Format implementations
//!
//! This module contains all output formats an operation batch can be rendered to.

pub mod gdocs;
pub mod listing;
pub mod text;

pub use gdocs::BatchJsonFormat;
pub use listing::ListingFormat;
pub use text::TextFormat;
