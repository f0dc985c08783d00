//! Engine error types.

use quizd_store::StoreError;
use quizd_types::{QuestionId, QuizId, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid quiz: {0}")]
    InvalidQuiz(String),

    #[error("quiz not found: {0}")]
    QuizNotFound(QuizId),

    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("no results for quiz {quiz_id} and user {user_id}")]
    ResultsNotFound { quiz_id: QuizId, user_id: UserId },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
