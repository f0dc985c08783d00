//! Request handlers and wire DTOs.
//!
//! All request and response bodies use camelCase field names. Responses are
//! serialized from typed structs only; redaction is structural, never done
//! by stripping fields from a serialized value.

use crate::error::RpcError;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::Json;
use quizd_engine::SessionEngine;
use quizd_store::{CatalogStore, ResultStore};
use quizd_types::{
    Answer, QuestionDraft, QuestionId, Quiz, QuizDraft, QuizId, QuizResult, QuizView, UserId,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ── Body extraction ──────────────────────────────────────────────────────

/// JSON body extractor whose rejection is an [`RpcError`], so malformed or
/// wrong-typed bodies answer 400 with the service's `{message}` shape
/// instead of the extractor's 422 default.
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RpcError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

// ── Create quiz ──────────────────────────────────────────────────────────

/// Loosely-typed creation body. The gate below rejects missing fields with
/// 400 before the strict [`QuizDraft`] ever reaches the engine.
#[derive(Deserialize)]
pub struct CreateQuizRequest {
    pub title: Option<String>,
    pub questions: Option<Vec<QuestionInput>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    pub text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_option: Option<u32>,
}

impl CreateQuizRequest {
    fn into_draft(self) -> Result<QuizDraft, RpcError> {
        let title = self
            .title
            .ok_or_else(|| RpcError::InvalidRequest("title is required".into()))?;
        let questions = self
            .questions
            .ok_or_else(|| RpcError::InvalidRequest("questions is required".into()))?
            .into_iter()
            .enumerate()
            .map(|(index, q)| {
                Ok(QuestionDraft {
                    text: q.text.ok_or_else(|| {
                        RpcError::InvalidRequest(format!("question {index}: text is required"))
                    })?,
                    options: q.options.ok_or_else(|| {
                        RpcError::InvalidRequest(format!("question {index}: options is required"))
                    })?,
                    correct_option: q.correct_option.ok_or_else(|| {
                        RpcError::InvalidRequest(format!(
                            "question {index}: correctOption is required"
                        ))
                    })?,
                })
            })
            .collect::<Result<Vec<_>, RpcError>>()?;
        Ok(QuizDraft { title, questions })
    }
}

// ── Submit answer ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub user_id: Option<UserId>,
    pub selected_option: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<u32>,
}

// ── Results ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ResultsResponse {
    pub score: u32,
    pub answers: Vec<Answer>,
}

impl From<QuizResult> for ResultsResponse {
    fn from(result: QuizResult) -> Self {
        Self {
            score: result.score,
            answers: result.answers,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────

pub async fn create_quiz<S>(
    State(engine): State<Arc<SessionEngine<S>>>,
    ApiJson(request): ApiJson<CreateQuizRequest>,
) -> Result<(StatusCode, Json<Quiz>), RpcError>
where
    S: CatalogStore + ResultStore + Send + Sync + 'static,
{
    let quiz = engine.create_quiz(request.into_draft()?)?;
    Ok((StatusCode::CREATED, Json(quiz)))
}

pub async fn get_quiz<S>(
    State(engine): State<Arc<SessionEngine<S>>>,
    Path(quiz_id): Path<String>,
) -> Result<Json<QuizView>, RpcError>
where
    S: CatalogStore + ResultStore + Send + Sync + 'static,
{
    let view = engine.quiz_view(&QuizId::new(quiz_id))?;
    Ok(Json(view))
}

pub async fn submit_answer<S>(
    State(engine): State<Arc<SessionEngine<S>>>,
    Path((quiz_id, question_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, RpcError>
where
    S: CatalogStore + ResultStore + Send + Sync + 'static,
{
    let user_id = request
        .user_id
        .ok_or_else(|| RpcError::InvalidRequest("userId is required".into()))?;
    let selected_option = request
        .selected_option
        .ok_or_else(|| RpcError::InvalidRequest("selectedOption is required".into()))?;

    let outcome = engine.submit_answer(
        &QuizId::new(quiz_id),
        &QuestionId::new(question_id),
        &user_id,
        selected_option,
    )?;

    let response = if outcome.correct {
        SubmitAnswerResponse {
            message: "Correct answer!",
            correct_answer: None,
        }
    } else {
        SubmitAnswerResponse {
            message: "Incorrect answer",
            correct_answer: outcome.correct_option,
        }
    };
    Ok(Json(response))
}

pub async fn get_results<S>(
    State(engine): State<Arc<SessionEngine<S>>>,
    Path((quiz_id, user_id)): Path<(String, String)>,
) -> Result<Json<ResultsResponse>, RpcError>
where
    S: CatalogStore + ResultStore + Send + Sync + 'static,
{
    let result = engine.results(&QuizId::new(quiz_id), &UserId::new(user_id))?;
    Ok(Json(result.into()))
}
