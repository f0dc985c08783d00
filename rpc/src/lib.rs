//! HTTP API server for quizd.
//!
//! Endpoints:
//! - `POST /quizzes` — create a quiz
//! - `GET /quizzes/{id}` — fetch a quiz with correct answers redacted
//! - `POST /quizzes/{quizId}/questions/{questionId}/submit` — grade an answer
//! - `GET /quizzes/{quizId}/results/{userId}` — fetch a user's scored result

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{routes, RpcServer};
