//! In-process store, used by tests and when no document should be written.

use std::sync::{Arc, RwLock};

use super::{push_answer, QuestionStore, Result};
use crate::models::*;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }
}

impl QuestionStore for MemoryStore {
    fn list(&self) -> Result<Vec<Question>> {
        let questions = self.questions.read().expect("question lock poisoned");
        Ok(questions.clone())
    }

    fn add(&self, input: NewQuestion) -> Result<Question> {
        let question = Question::new(input);
        let mut questions = self.questions.write().expect("question lock poisoned");
        questions.push(question.clone());
        Ok(question)
    }

    fn add_answer(&self, question_id: &str, input: NewAnswer) -> Result<Option<Answer>> {
        let mut questions = self.questions.write().expect("question lock poisoned");
        Ok(push_answer(&mut questions, question_id, input))
    }
}
