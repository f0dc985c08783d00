//! Per-user result model: the scored record of one user's answers to one quiz.

use crate::id::{QuestionId, QuizId, UserId};
use serde::{Deserialize, Serialize};

/// One user's recorded selection for one question. At most one per question
/// within a result; re-submission replaces the selection in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_option: u32,
    pub is_correct: bool,
}

/// The scored record of one user's answers to one quiz. Identified by the
/// (quiz, user) pair; created lazily on first submission, never deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: QuizId,
    pub user_id: UserId,
    pub score: u32,
    /// Answers in the order they were first recorded. Replacement keeps the
    /// original position.
    pub answers: Vec<Answer>,
}

impl QuizResult {
    /// An empty result for a (quiz, user) pair that has not answered yet.
    pub fn new(quiz_id: QuizId, user_id: UserId) -> Self {
        Self {
            quiz_id,
            user_id,
            score: 0,
            answers: Vec::new(),
        }
    }

    /// Record a selection for a question: replaces the existing answer for
    /// that question or appends a new one, then recomputes the score.
    ///
    /// The score is always recomputed from the full answer set rather than
    /// adjusted incrementally, so it stays a pure function of the answers.
    pub fn record_answer(&mut self, question_id: QuestionId, selected_option: u32, is_correct: bool) {
        match self.answers.iter_mut().find(|a| a.question_id == question_id) {
            Some(existing) => {
                existing.selected_option = selected_option;
                existing.is_correct = is_correct;
            }
            None => self.answers.push(Answer {
                question_id,
                selected_option,
                is_correct,
            }),
        }
        self.score = self.answers.iter().filter(|a| a.is_correct).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_result() -> QuizResult {
        QuizResult::new(QuizId::new("quiz"), UserId::new("u1"))
    }

    #[test]
    fn first_answer_appends_and_scores() {
        let mut result = fresh_result();
        result.record_answer(QuestionId::new("q1"), 1, true);
        assert_eq!(result.answers.len(), 1);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn resubmission_replaces_instead_of_appending() {
        let mut result = fresh_result();
        result.record_answer(QuestionId::new("q1"), 1, true);
        result.record_answer(QuestionId::new("q1"), 0, false);
        assert_eq!(result.answers.len(), 1);
        assert_eq!(result.answers[0].selected_option, 0);
        assert!(!result.answers[0].is_correct);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn score_counts_only_correct_answers() {
        let mut result = fresh_result();
        result.record_answer(QuestionId::new("q1"), 1, true);
        result.record_answer(QuestionId::new("q2"), 2, false);
        result.record_answer(QuestionId::new("q3"), 0, true);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn replacement_keeps_first_recorded_order() {
        let mut result = fresh_result();
        result.record_answer(QuestionId::new("q1"), 0, false);
        result.record_answer(QuestionId::new("q2"), 1, true);
        result.record_answer(QuestionId::new("q1"), 2, true);
        let order: Vec<&str> = result.answers.iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(order, vec!["q1", "q2"]);
    }
}
