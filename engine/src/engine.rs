//! The session engine: orchestration over the catalog and result stores.

use crate::error::EngineError;
use quizd_store::{CatalogStore, ResultStore, StoreError};
use quizd_types::{
    Question, QuestionId, Quiz, QuizDraft, QuizId, QuizResult, QuizView, UserId,
};
use tracing::{info, warn};

/// Outcome of grading one answer submission.
///
/// The correct option is revealed only when the submission was wrong, so a
/// taker cannot fish it out of the response by submitting repeatedly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_option: Option<u32>,
}

/// The quiz session engine. Owns all service state through the injected
/// store; every operation is a bounded, synchronous, in-memory computation.
pub struct SessionEngine<S> {
    store: S,
}

impl<S> SessionEngine<S>
where
    S: CatalogStore + ResultStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a quiz from a validated draft: allocate fresh quiz and
    /// question ids, store the quiz, and return it in full (the author must
    /// see the correct options it authored).
    pub fn create_quiz(&self, draft: QuizDraft) -> Result<Quiz, EngineError> {
        validate_draft(&draft)?;

        let quiz = Quiz {
            id: QuizId::generate(),
            title: draft.title,
            questions: draft
                .questions
                .into_iter()
                .map(|q| Question {
                    id: QuestionId::generate(),
                    text: q.text,
                    options: q.options,
                    correct_option: q.correct_option,
                })
                .collect(),
        };

        self.store.put_quiz(&quiz)?;
        info!(quiz_id = %quiz.id, questions = quiz.questions.len(), "quiz created");
        Ok(quiz)
    }

    /// Fetch a quiz as its redacted view, with every correct-option field
    /// structurally absent.
    pub fn quiz_view(&self, quiz_id: &QuizId) -> Result<QuizView, EngineError> {
        Ok(self.lookup_quiz(quiz_id)?.redacted())
    }

    /// Grade a submission and record it in the user's result.
    ///
    /// Lazily creates the result on the first submission for the (quiz,
    /// user) pair; a re-submission for an already-answered question replaces
    /// the prior selection instead of accumulating a duplicate.
    pub fn submit_answer(
        &self,
        quiz_id: &QuizId,
        question_id: &QuestionId,
        user_id: &UserId,
        selected_option: u32,
    ) -> Result<AnswerOutcome, EngineError> {
        let quiz = self.lookup_quiz(quiz_id)?;
        let question = quiz.question(question_id).ok_or_else(|| {
            warn!(%quiz_id, %question_id, "question not found");
            EngineError::QuestionNotFound(question_id.clone())
        })?;

        let correct = selected_option == question.correct_option;
        self.store
            .upsert_answer(quiz_id, user_id, question_id, selected_option, correct)?;

        info!(%quiz_id, %question_id, %user_id, correct, "answer recorded");
        Ok(AnswerOutcome {
            correct,
            correct_option: (!correct).then_some(question.correct_option),
        })
    }

    /// Fetch the scored result for a (quiz, user) pair.
    pub fn results(&self, quiz_id: &QuizId, user_id: &UserId) -> Result<QuizResult, EngineError> {
        match self.store.find_result(quiz_id, user_id) {
            Ok(result) => Ok(result),
            Err(StoreError::NotFound(_)) => {
                warn!(%quiz_id, %user_id, "results not found");
                Err(EngineError::ResultsNotFound {
                    quiz_id: quiz_id.clone(),
                    user_id: user_id.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn lookup_quiz(&self, quiz_id: &QuizId) -> Result<Quiz, EngineError> {
        match self.store.get_quiz(quiz_id) {
            Ok(quiz) => Ok(quiz),
            Err(StoreError::NotFound(_)) => {
                warn!(%quiz_id, "quiz not found");
                Err(EngineError::QuizNotFound(quiz_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

const MAX_TITLE_CHARS: usize = 255;

/// The schema gate for quiz creation: non-empty title of bounded length,
/// at least one question, at least two options per question, and an
/// in-range correct option.
fn validate_draft(draft: &QuizDraft) -> Result<(), EngineError> {
    if draft.title.trim().is_empty() {
        return Err(EngineError::InvalidQuiz("title must not be empty".into()));
    }
    if draft.title.chars().count() > MAX_TITLE_CHARS {
        return Err(EngineError::InvalidQuiz(format!(
            "title must not exceed {MAX_TITLE_CHARS} characters"
        )));
    }
    if draft.questions.is_empty() {
        return Err(EngineError::InvalidQuiz(
            "quiz must contain at least one question".into(),
        ));
    }
    for (index, question) in draft.questions.iter().enumerate() {
        if question.options.len() < 2 {
            return Err(EngineError::InvalidQuiz(format!(
                "question {index} must have at least 2 options"
            )));
        }
        if (question.correct_option as usize) >= question.options.len() {
            return Err(EngineError::InvalidQuiz(format!(
                "question {index} correct option {} is out of range",
                question.correct_option
            )));
        }
    }
    Ok(())
}
