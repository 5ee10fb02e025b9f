use serde::{Deserialize, Serialize};

use super::{new_id, Answer};

/// A question as stored in the document.
///
/// `answers` is always present once a question exists, even when empty.
/// Ids are generated UUID strings but are kept as plain strings so that
/// documents written by other tools still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub author: String,
    pub summary: String,
    pub answers: Vec<Answer>,
}

impl Question {
    /// Build a question with a fresh id and no answers.
    pub fn new(input: NewQuestion) -> Self {
        Self {
            id: new_id(),
            author: input.author,
            summary: input.summary,
            answers: Vec::new(),
        }
    }

    pub fn answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }
}

/// Input for creating a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub author: String,
    pub summary: String,
}
