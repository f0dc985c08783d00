//! Quiz session engine.
//!
//! Owns the quiz catalog and the result ledger through an injected store and
//! exposes the four service operations:
//! - create a quiz (ids allocated, input validated)
//! - fetch a quiz as a redacted view
//! - submit and grade an answer (idempotent per question, score recomputed)
//! - fetch a user's scored result

pub mod engine;
pub mod error;

pub use engine::{AnswerOutcome, SessionEngine};
pub use error::EngineError;
