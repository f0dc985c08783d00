//! Quiz catalog storage trait.

use crate::StoreError;
use quizd_types::{Quiz, QuizId};

/// Storage for created quizzes. Quizzes are write-once: there is no update
/// or delete operation.
pub trait CatalogStore {
    /// Store a newly created quiz. Fails with [`StoreError::Duplicate`] if a
    /// quiz with the same id already exists.
    fn put_quiz(&self, quiz: &Quiz) -> Result<(), StoreError>;

    /// Fetch a quiz by id, including correct options.
    fn get_quiz(&self, id: &QuizId) -> Result<Quiz, StoreError>;

    fn quiz_count(&self) -> Result<u64, StoreError>;
}
