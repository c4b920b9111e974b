//! End-to-end tests: markdown source to rendered batch and published document.

mod listing;
mod meeting_notes;
mod publish;
