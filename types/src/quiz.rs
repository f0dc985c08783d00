//! Quiz catalog model: quizzes, questions, draft inputs, and redacted views.

use crate::id::{QuestionId, QuizId};
use serde::{Deserialize, Serialize};

/// A titled, ordered set of questions. Immutable after creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub questions: Vec<Question>,
}

/// One multiple-choice item. `correct_option` indexes into `options` and is
/// guaranteed in range by construction (validated at quiz creation).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: u32,
}

/// Client input for a new quiz, before ids are allocated.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

/// Client input for one question of a new quiz.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: u32,
}

/// Read view of a quiz with every correct-answer field structurally absent.
///
/// Quiz takers fetch this shape; the correct option cannot leak through it
/// because the type simply has no field to carry it.
#[derive(Clone, Debug, Serialize)]
pub struct QuizView {
    pub id: QuizId,
    pub title: String,
    pub questions: Vec<QuestionView>,
}

/// Redacted view of one question.
#[derive(Clone, Debug, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
}

impl Quiz {
    /// Find a question by id within this quiz.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Project this quiz into its redacted read view.
    pub fn redacted(&self) -> QuizView {
        QuizView {
            id: self.id.clone(),
            title: self.title.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| QuestionView {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz {
            id: QuizId::generate(),
            title: "Arithmetic".into(),
            questions: vec![Question {
                id: QuestionId::generate(),
                text: "1 + 2 = ?".into(),
                options: vec!["3".into(), "4".into(), "5".into()],
                correct_option: 0,
            }],
        }
    }

    #[test]
    fn redacted_view_has_no_correct_option_key() {
        let view = sample_quiz().redacted();
        let json = serde_json::to_value(&view).unwrap();
        for question in json["questions"].as_array().unwrap() {
            assert!(question.get("correctOption").is_none());
            assert!(question.get("correct_option").is_none());
        }
    }

    #[test]
    fn full_quiz_serializes_correct_option_camel_case() {
        let json = serde_json::to_value(sample_quiz()).unwrap();
        assert_eq!(json["questions"][0]["correctOption"], 0);
    }

    #[test]
    fn question_lookup_by_id() {
        let quiz = sample_quiz();
        let qid = quiz.questions[0].id.clone();
        assert!(quiz.question(&qid).is_some());
        assert!(quiz.question(&QuestionId::new("missing")).is_none());
    }
}
