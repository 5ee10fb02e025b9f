//! File-backed store.
//!
//! The whole question list lives in one JSON array. Reads load and parse the
//! entire file; writes serialize the entire list to a sibling temp file and
//! rename it over the document, so a failed write leaves the previous
//! document in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{push_answer, QuestionStore, Result, StoreError};
use crate::models::*;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes load/modify/write cycles between clones of this store.
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the document as an empty array if it does not exist yet.
    ///
    /// Returns `true` when a new document was written. An existing file is
    /// never touched, whatever its content.
    pub fn ensure_document(&self) -> Result<bool> {
        let _guard = self.lock.lock().expect("document lock poisoned");

        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        self.write_document(&[])?;
        tracing::info!("Created empty question document at {}", self.path.display());
        Ok(true)
    }

    fn read_document(&self) -> Result<Vec<Question>> {
        let content = fs::read_to_string(&self.path).map_err(io_error(&self.path))?;
        serde_json::from_str(&content).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn write_document(&self, questions: &[Question]) -> Result<()> {
        let json = serde_json::to_string(questions).map_err(StoreError::Serialize)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, json).map_err(io_error(&temp_path))?;
        fs::rename(&temp_path, &self.path).map_err(io_error(&self.path))?;

        tracing::debug!(
            "Wrote {} questions to {}",
            questions.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl QuestionStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Question>> {
        let _guard = self.lock.lock().expect("document lock poisoned");
        self.read_document()
    }

    fn add(&self, input: NewQuestion) -> Result<Question> {
        let _guard = self.lock.lock().expect("document lock poisoned");
        let mut questions = self.read_document()?;

        let question = Question::new(input);
        questions.push(question.clone());
        self.write_document(&questions)?;

        Ok(question)
    }

    fn add_answer(&self, question_id: &str, input: NewAnswer) -> Result<Option<Answer>> {
        let _guard = self.lock.lock().expect("document lock poisoned");
        let mut questions = self.read_document()?;

        let Some(answer) = push_answer(&mut questions, question_id, input) else {
            return Ok(None);
        };
        self.write_document(&questions)?;

        Ok(Some(answer))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        let store = JsonFileStore::new(dir.path().join("questions.json"));
        store.ensure_document().unwrap();
        store
    }

    fn question(summary: &str) -> NewQuestion {
        NewQuestion {
            author: "Jack".to_string(),
            summary: summary.to_string(),
        }
    }

    #[test]
    fn ensure_document_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/questions.json"));

        assert!(store.ensure_document().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn ensure_document_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(question("Q1")).unwrap();

        assert!(!store.ensure_document().unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn writes_leave_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(question("Q1")).unwrap();

        assert!(!store.temp_path().exists());
    }

    #[test]
    fn missing_document_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));

        let err = store.list().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn malformed_document_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("questions.json"));
        fs::write(store.path(), r#"{"not": "an array"}"#).unwrap();

        let err = store.list().unwrap_err();
        assert!(matches!(err, StoreError::Format { .. }));
    }

    #[test]
    fn failed_add_leaves_document_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("questions.json"));
        fs::write(store.path(), "not json").unwrap();

        assert!(store.add(question("Q1")).is_err());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }

    #[test]
    fn concurrent_adds_are_all_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.add(question(&format!("Q{}", i))).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.list().unwrap().len(), 8);
    }
}
