//! Result ledger storage trait.

use crate::StoreError;
use quizd_types::{QuestionId, QuizId, QuizResult, UserId};

/// Storage for per-user quiz results. At most one result exists per
/// (quiz, user) pair.
pub trait ResultStore {
    /// Pure lookup of the result for a (quiz, user) pair. No side effect;
    /// [`StoreError::NotFound`] if the user has not submitted any answer.
    fn find_result(&self, quiz_id: &QuizId, user_id: &UserId) -> Result<QuizResult, StoreError>;

    /// Record a graded answer: locate or lazily create the result for the
    /// (quiz, user) pair, replace or append the answer for `question_id`,
    /// and recompute the score.
    ///
    /// Implementations must execute the whole unit indivisibly so that
    /// concurrent submissions never create duplicate results or answers and
    /// never leave the score inconsistent with the answer set. Returns the
    /// updated result.
    fn upsert_answer(
        &self,
        quiz_id: &QuizId,
        user_id: &UserId,
        question_id: &QuestionId,
        selected_option: u32,
        is_correct: bool,
    ) -> Result<QuizResult, StoreError>;

    fn result_count(&self) -> Result<u64, StoreError>;
}
