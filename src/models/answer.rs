use serde::{Deserialize, Serialize};

use super::new_id;

/// An answer, owned by the question it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub author: String,
    pub summary: String,
}

impl Answer {
    /// Build an answer with a fresh id.
    pub fn new(input: NewAnswer) -> Self {
        Self {
            id: new_id(),
            author: input.author,
            summary: input.summary,
        }
    }
}

/// Input for adding an answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnswer {
    pub author: String,
    pub summary: String,
}
