//! Quiz Flow Tests
//!
//! End-to-end flows across mutators, validation, storage and preview,
//! using an in-memory store and predictable ids.

#[cfg(test)]
mod tests {
    use crate::{
        add_answer_to_question, add_question, load_or, remove_answer_from_question, remove_question,
        save, update_answer_correctness, update_answer_text, update_question_text,
        update_question_type, validate, MemoryStore, PreviewPhase, PreviewSession, QuestionType,
        QuizData, QuizMode, SequentialIds, StorageKeys, MIN_ANSWERS,
    };

    fn quiz_with(ids: &SequentialIds, texts: &[&str]) -> QuizData {
        let mut questions = Vec::new();
        for text in texts {
            let (updated, id) = add_question(&questions, ids);
            questions = update_question_text(&updated, &id, text);
        }
        QuizData::new(questions)
    }

    #[test]
    fn test_scenario_single_question_becomes_valid() {
        let ids = SequentialIds::new("s");
        let quiz = QuizData::default();

        let (questions, qid) = add_question(&quiz.questions, &ids);
        let question = &questions[0];
        assert_eq!(question.question_type, QuestionType::SingleChoice);
        assert_eq!(question.answers.len(), 4);
        assert!(question.answers[1].is_correct);
        assert_eq!(question.answers[1].answer_text, "Option B");

        let quiz = QuizData::new(update_question_text(&questions, &qid, "What is 2+2?"));
        let result = validate(&quiz);
        assert!(result.question(&qid).unwrap().is_valid);
        assert!(result.quiz_valid);
    }

    #[test]
    fn test_scenario_one_blank_question_invalidates_quiz() {
        let ids = SequentialIds::new("s");
        let quiz = quiz_with(&ids, &["First?", ""]);
        assert!(validate(&quiz).questions[0].is_valid);
        assert!(!validate(&quiz).quiz_valid);

        let second = quiz.questions[1].id.clone();
        let fixed = QuizData::new(update_question_text(&quiz.questions, &second, "Second?"));
        assert!(validate(&fixed).quiz_valid);
    }

    #[test]
    fn test_scenario_preview_walkthrough() {
        let ids = SequentialIds::new("s");
        let quiz = quiz_with(&ids, &["One?", "Two?"]);
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let mut session = PreviewSession::restore(store.clone(), keys.progress.clone(), quiz.len());

        let first = session.current_question(&quiz).unwrap().clone();
        let wrong = first.answers.iter().find(|a| !a.is_correct).unwrap();
        session.select_answer(&wrong.id, first.question_type);
        assert_eq!(session.check_answer(&first.correct_answer_ids()), Ok(false));
        assert!(!session.is_last_question());

        assert_eq!(session.next_question(first.question_type), Ok(1));
        assert!(session.selected_answers().is_empty());
        assert!(!session.has_checked());
        assert!(session.is_last_question());

        let second = session.current_question(&quiz).unwrap().clone();
        let right = second.answers.iter().find(|a| a.is_correct).unwrap();
        session.select_answer(&right.id, second.question_type);
        assert_eq!(session.check_answer(&second.correct_answer_ids()), Ok(true));
        session.finish_quiz(second.question_type).unwrap();
        assert_eq!(session.phase(), &PreviewPhase::Finished);

        session.restart();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.phase(), &PreviewPhase::default());
        assert_eq!(load_or(&store, &keys.progress, 7usize), 0);
    }

    #[test]
    fn test_scenario_stale_progress_index() {
        let ids = SequentialIds::new("s");
        let quiz = quiz_with(&ids, &["One?", "Two?"]);
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        save(&store, &keys.progress, &5usize);

        let session = PreviewSession::restore(store, keys.progress, quiz.len());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question(&quiz).unwrap().question_text, "One?");
    }

    #[test]
    fn test_progress_survives_reload_but_answers_do_not() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let mut session = PreviewSession::restore(store.clone(), keys.progress.clone(), 3);
        session.next_question(QuestionType::ShortAnswer).unwrap();
        session.select_answer("x", QuestionType::SingleChoice);

        let reloaded = PreviewSession::restore(store, keys.progress, 3);
        assert_eq!(reloaded.current_index(), 1);
        assert!(reloaded.selected_answers().is_empty());
    }

    #[test]
    fn test_deleting_current_question_restarts_preview() {
        let ids = SequentialIds::new("s");
        let quiz = quiz_with(&ids, &["One?", "Two?"]);
        let store = MemoryStore::new();
        let mut session = PreviewSession::restore(store, "progress", quiz.len());
        session.next_question(QuestionType::ShortAnswer).unwrap();

        let last = quiz.questions[1].id.clone();
        let quiz = QuizData::new(remove_question(&quiz.questions, &last));
        assert!(session.reconcile(quiz.len()));
        assert_eq!(session.current_question(&quiz).unwrap().question_text, "One?");
    }

    #[test]
    fn test_quiz_round_trips_through_store() {
        let ids = SequentialIds::new("s");
        let quiz = quiz_with(&ids, &["One?", "Two?"]);
        let q1 = quiz.questions[1].id.clone();
        let mut questions = update_question_type(&quiz.questions, &q1, QuestionType::MultipleChoice);
        let a0 = questions[1].answers[0].id.clone();
        let a3 = questions[1].answers[3].id.clone();
        questions = update_answer_correctness(&questions, &q1, &a0, true);
        questions = update_answer_correctness(&questions, &q1, &a3, true);
        questions = update_answer_text(&questions, &q1, &a3, "Both");
        let quiz = QuizData::new(questions);

        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        assert!(save(&store, &keys.quiz_data, &quiz));
        assert!(save(&store, &keys.mode, &QuizMode::Preview));

        assert_eq!(load_or(&store, &keys.quiz_data, QuizData::default()), quiz);
        assert_eq!(load_or(&store, &keys.mode, QuizMode::Edit), QuizMode::Preview);
    }

    #[test]
    fn test_fresh_store_uses_defaults() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        assert!(load_or(&store, &keys.quiz_data, QuizData::default()).is_empty());
        assert_eq!(load_or(&store, &keys.mode, QuizMode::default()), QuizMode::Edit);
        assert_eq!(load_or(&store, &keys.progress, 0usize), 0);
    }

    #[test]
    fn test_random_edit_sequences_keep_invariants() {
        let ids = SequentialIds::new("s");
        let mut questions = quiz_with(&ids, &["A?", "B?"]).questions;

        // Deterministic pseudo-random walk over the mutators
        let mut seed: u64 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let q = &questions[(seed % 2) as usize];
            let qid = q.id.clone();
            let aid = q.answers[(seed as usize / 3) % q.answers.len()].id.clone();
            questions = match (seed >> 8) % 5 {
                0 => add_answer_to_question(&questions, &qid, &ids),
                1 => remove_answer_from_question(&questions, &qid, &aid),
                2 => update_answer_correctness(&questions, &qid, &aid, seed % 3 != 0),
                3 => update_question_type(&questions, &qid, QuestionType::ALL[(seed % 2) as usize]),
                _ => update_answer_text(&questions, &qid, &aid, "edited"),
            };

            for q in &questions {
                assert!(q.answers.len() >= MIN_ANSWERS);
                if q.question_type == QuestionType::SingleChoice {
                    assert!(q.answers.iter().filter(|a| a.is_correct).count() <= 1);
                }
            }
        }
    }
}
