use proptest::prelude::*;

use quizd_engine::SessionEngine;
use quizd_store::MemoryStore;
use quizd_types::{QuestionDraft, QuizDraft, UserId};

fn quiz_draft(option_counts: &[u32]) -> QuizDraft {
    QuizDraft {
        title: "Generated".into(),
        questions: option_counts
            .iter()
            .map(|&n| QuestionDraft {
                text: "?".into(),
                options: (0..n).map(|i| format!("option {i}")).collect(),
                // Correct answer pinned to the last option.
                correct_option: n - 1,
            })
            .collect(),
    }
}

proptest! {
    /// The score must always equal the number of correct answers in the
    /// result, after any sequence of submissions including repeats.
    #[test]
    fn score_equals_correct_answer_count(
        option_counts in prop::collection::vec(2u32..5, 1..6),
        submissions in prop::collection::vec((0usize..6, 0u32..5), 1..40),
    ) {
        let engine = SessionEngine::new(MemoryStore::new());
        let quiz = engine.create_quiz(quiz_draft(&option_counts)).unwrap();
        let user = UserId::new("prop-user");

        for (qi, selected) in submissions {
            let question = &quiz.questions[qi % quiz.questions.len()];
            let selected = selected % question.options.len() as u32;
            engine.submit_answer(&quiz.id, &question.id, &user, selected).unwrap();
        }

        let result = engine.results(&quiz.id, &user).unwrap();
        let correct = result.answers.iter().filter(|a| a.is_correct).count() as u32;
        prop_assert_eq!(result.score, correct);
    }

    /// Each question holds at most one answer no matter how often it is
    /// re-answered, and the stored answer reflects the latest submission.
    #[test]
    fn one_answer_per_question_last_write_wins(
        option_counts in prop::collection::vec(2u32..5, 1..6),
        submissions in prop::collection::vec((0usize..6, 0u32..5), 1..40),
    ) {
        let engine = SessionEngine::new(MemoryStore::new());
        let quiz = engine.create_quiz(quiz_draft(&option_counts)).unwrap();
        let user = UserId::new("prop-user");

        let mut latest = std::collections::HashMap::new();
        for (qi, selected) in submissions {
            let question = &quiz.questions[qi % quiz.questions.len()];
            let selected = selected % question.options.len() as u32;
            engine.submit_answer(&quiz.id, &question.id, &user, selected).unwrap();
            latest.insert(question.id.clone(), selected);
        }

        let result = engine.results(&quiz.id, &user).unwrap();
        prop_assert_eq!(result.answers.len(), latest.len());
        for answer in &result.answers {
            prop_assert_eq!(answer.selected_option, latest[&answer.question_id]);
        }
    }

    /// The grading outcome reveals the correct option exactly when the
    /// submission was wrong.
    #[test]
    fn correct_option_revealed_only_on_wrong_answers(
        option_counts in prop::collection::vec(2u32..5, 1..4),
        qi in 0usize..4,
        selected in 0u32..5,
    ) {
        let engine = SessionEngine::new(MemoryStore::new());
        let quiz = engine.create_quiz(quiz_draft(&option_counts)).unwrap();
        let question = &quiz.questions[qi % quiz.questions.len()];
        let selected = selected % question.options.len() as u32;

        let outcome = engine
            .submit_answer(&quiz.id, &question.id, &UserId::new("prop-user"), selected)
            .unwrap();

        if selected == question.correct_option {
            prop_assert!(outcome.correct);
            prop_assert_eq!(outcome.correct_option, None);
        } else {
            prop_assert!(!outcome.correct);
            prop_assert_eq!(outcome.correct_option, Some(question.correct_option));
        }
    }
}
