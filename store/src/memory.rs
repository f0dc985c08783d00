//! In-memory storage backend.
//!
//! Thread-safe via per-collection mutexes; the whole process state lives
//! here for the process lifetime and does not survive restarts.

use crate::catalog::CatalogStore;
use crate::results::ResultStore;
use crate::StoreError;
use quizd_types::{QuestionId, Quiz, QuizId, QuizResult, UserId};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory quiz catalog and result ledger.
pub struct MemoryStore {
    quizzes: Mutex<HashMap<String, Quiz>>,
    results: Mutex<HashMap<(String, String), QuizResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            quizzes: Mutex::new(HashMap::new()),
            results: Mutex::new(HashMap::new()),
        }
    }

    fn result_key(quiz_id: &QuizId, user_id: &UserId) -> (String, String) {
        (quiz_id.as_str().to_owned(), user_id.as_str().to_owned())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryStore {
    fn put_quiz(&self, quiz: &Quiz) -> Result<(), StoreError> {
        let mut quizzes = self.quizzes.lock().unwrap();
        if quizzes.contains_key(quiz.id.as_str()) {
            return Err(StoreError::Duplicate(quiz.id.to_string()));
        }
        quizzes.insert(quiz.id.as_str().to_owned(), quiz.clone());
        Ok(())
    }

    fn get_quiz(&self, id: &QuizId) -> Result<Quiz, StoreError> {
        self.quizzes
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn quiz_count(&self) -> Result<u64, StoreError> {
        Ok(self.quizzes.lock().unwrap().len() as u64)
    }
}

impl ResultStore for MemoryStore {
    fn find_result(&self, quiz_id: &QuizId, user_id: &UserId) -> Result<QuizResult, StoreError> {
        self.results
            .lock()
            .unwrap()
            .get(&Self::result_key(quiz_id, user_id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("{quiz_id}/{user_id}")))
    }

    fn upsert_answer(
        &self,
        quiz_id: &QuizId,
        user_id: &UserId,
        question_id: &QuestionId,
        selected_option: u32,
        is_correct: bool,
    ) -> Result<QuizResult, StoreError> {
        // One guard across locate-or-create, replace-or-append, and score
        // recomputation: the indivisible unit the ledger contract requires.
        let mut results = self.results.lock().unwrap();
        let result = results
            .entry(Self::result_key(quiz_id, user_id))
            .or_insert_with(|| QuizResult::new(quiz_id.clone(), user_id.clone()));
        result.record_answer(question_id.clone(), selected_option, is_correct);
        Ok(result.clone())
    }

    fn result_count(&self) -> Result<u64, StoreError> {
        Ok(self.results.lock().unwrap().len() as u64)
    }
}
