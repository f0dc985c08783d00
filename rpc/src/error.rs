//! RPC error types and their HTTP mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quizd_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("quiz not found")]
    QuizNotFound,

    #[error("question not found")]
    QuestionNotFound,

    #[error("results not found")]
    ResultsNotFound,

    #[error("server error: {0}")]
    Server(String),
}

/// A malformed or wrong-typed body is a schema violation like any other:
/// 400 with a `{message}` body, not the extractor's default 422.
impl From<JsonRejection> for RpcError {
    fn from(rejection: JsonRejection) -> Self {
        RpcError::InvalidRequest(rejection.body_text())
    }
}

impl From<EngineError> for RpcError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidQuiz(reason) => RpcError::InvalidRequest(reason),
            EngineError::QuizNotFound(_) => RpcError::QuizNotFound,
            EngineError::QuestionNotFound(_) => RpcError::QuestionNotFound,
            EngineError::ResultsNotFound { .. } => RpcError::ResultsNotFound,
            EngineError::Store(e) => RpcError::Server(e.to_string()),
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RpcError::InvalidRequest(reason) => (StatusCode::BAD_REQUEST, reason),
            RpcError::QuizNotFound => (StatusCode::NOT_FOUND, "Quiz not found".to_owned()),
            RpcError::QuestionNotFound => {
                (StatusCode::NOT_FOUND, "Question not found".to_owned())
            }
            RpcError::ResultsNotFound => (
                StatusCode::NOT_FOUND,
                "Results not found for the given quiz and user".to_owned(),
            ),
            RpcError::Server(detail) => {
                // Log the internals, never leak them to the client.
                tracing::error!(%detail, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_owned(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
