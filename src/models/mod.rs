//! Domain models for Responder.
//!
//! - [`Question`]: Top-level record with an author, a summary and its answers.
//! - [`Answer`]: Reply to exactly one question. Answers have no existence
//!   outside the question that owns them.
//!
//! The persisted document is a JSON array of [`Question`] in insertion order.

mod answer;
mod question;

pub use answer::*;
pub use question::*;

/// Generate a fresh identifier for a question or an answer.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
