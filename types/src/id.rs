//! Opaque identifier types.
//!
//! Quiz and question ids are allocated by the service (UUIDv4, rendered as
//! strings) and never reused. User ids are supplied by the client and are
//! opaque to the service.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a quiz, assigned at creation.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(String);

/// Unique identifier of a question within its quiz, assigned at creation.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

/// Opaque client-supplied user identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! opaque_id {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id!(QuizId);
opaque_id!(QuestionId);
opaque_id!(UserId);

impl QuizId {
    /// Allocate a fresh unique quiz id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl QuestionId {
    /// Allocate a fresh unique question id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = QuizId::generate();
        let b = QuizId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = QuestionId::new("q-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"q-1\"");
    }
}
