//! Question persistence.
//!
//! [`QuestionStore`] is the only way the rest of the crate touches stored
//! questions. Handlers receive it as a [`SharedStore`] so the file-backed
//! [`JsonFileStore`] can be swapped for a [`MemoryStore`] without touching
//! the file system.

mod json_file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::models::*;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised while loading or persisting the document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid question document: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize questions: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Store handle shared between request handlers.
pub type SharedStore = Arc<dyn QuestionStore>;

/// Read and append operations over questions and their answers.
///
/// Lookups return `Ok(None)` when the question or answer does not exist;
/// errors are reserved for I/O and malformed documents. Every call works on
/// a fresh load of the whole document.
pub trait QuestionStore: Send + Sync {
    /// All questions in insertion order.
    fn list(&self) -> Result<Vec<Question>>;

    /// Append a question with a fresh id and no answers.
    fn add(&self, input: NewQuestion) -> Result<Question>;

    /// Append an answer to an existing question.
    ///
    /// Returns `Ok(None)` and leaves the document untouched when no question
    /// has `question_id`.
    fn add_answer(&self, question_id: &str, input: NewAnswer) -> Result<Option<Answer>>;

    fn get_by_id(&self, question_id: &str) -> Result<Option<Question>> {
        Ok(self.list()?.into_iter().find(|q| q.id == question_id))
    }

    fn list_answers(&self, question_id: &str) -> Result<Option<Vec<Answer>>> {
        Ok(self.get_by_id(question_id)?.map(|q| q.answers))
    }

    fn get_answer(&self, question_id: &str, answer_id: &str) -> Result<Option<Answer>> {
        Ok(self
            .get_by_id(question_id)?
            .and_then(|q| q.answer(answer_id).cloned()))
    }
}

/// Append `input` to the question with `question_id` inside a loaded document.
///
/// Shared by the store implementations so they agree on lookup semantics.
pub(crate) fn push_answer(
    questions: &mut [Question],
    question_id: &str,
    input: NewAnswer,
) -> Option<Answer> {
    let question = questions.iter_mut().find(|q| q.id == question_id)?;
    let answer = Answer::new(input);
    question.answers.push(answer.clone());
    Some(answer)
}
