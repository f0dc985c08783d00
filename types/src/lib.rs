//! Fundamental types for the quizd service.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: opaque ids, the quiz catalog model, the per-user result model,
//! and the redacted read views.

pub mod id;
pub mod quiz;
pub mod result;

pub use id::{QuestionId, QuizId, UserId};
pub use quiz::{Question, QuestionDraft, QuestionView, Quiz, QuizDraft, QuizView};
pub use result::{Answer, QuizResult};
