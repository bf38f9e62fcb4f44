//! Preview Session
//!
//! Walks through a quiz one question at a time. Each question is either
//! awaiting an answer or checked; the whole session can be finished.
//! Only the question index is persisted, everything else resets on reload.

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::error::PreviewError;
use crate::models::{Question, QuestionType, QuizData};
use crate::storage::{load_or, save, KeyValueStore};

static NO_SELECTION: BTreeSet<String> = BTreeSet::new();

/// Where the session is for the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewPhase {
    /// Picking answers; nothing graded yet
    Answering { selected: BTreeSet<String> },
    /// Selection locked and graded
    Checked { selected: BTreeSet<String>, correct: bool },
    /// Past the last question
    Finished,
}

impl Default for PreviewPhase {
    fn default() -> Self {
        PreviewPhase::Answering { selected: BTreeSet::new() }
    }
}

/// Preview state machine bound to the store that keeps its progress
#[derive(Debug, Clone)]
pub struct PreviewSession<S> {
    store: S,
    progress_key: String,
    index: usize,
    total: usize,
    phase: PreviewPhase,
}

impl<S: KeyValueStore> PreviewSession<S> {
    /// Resume from the persisted index, restarting if it no longer fits
    pub fn restore(store: S, progress_key: impl Into<String>, total_questions: usize) -> Self {
        let progress_key = progress_key.into();
        let index = load_or(&store, &progress_key, 0usize);
        let mut session = Self {
            store,
            progress_key,
            index,
            total: total_questions,
            phase: PreviewPhase::default(),
        };
        if session.index_out_of_range() {
            warn!(
                "Stored preview index {} is out of range for {} questions, restarting",
                index, total_questions
            );
            session.restart();
        }
        session
    }

    fn index_out_of_range(&self) -> bool {
        self.index != 0 && self.index >= self.total
    }

    fn persist_index(&self) {
        save(&self.store, &self.progress_key, &self.index);
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn total_questions(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> &PreviewPhase {
        &self.phase
    }

    pub fn is_last_question(&self) -> bool {
        self.total > 0 && self.index == self.total - 1
    }

    pub fn selected_answers(&self) -> &BTreeSet<String> {
        match &self.phase {
            PreviewPhase::Answering { selected } | PreviewPhase::Checked { selected, .. } => selected,
            PreviewPhase::Finished => &NO_SELECTION,
        }
    }

    pub fn is_selected(&self, answer_id: &str) -> bool {
        self.selected_answers().contains(answer_id)
    }

    pub fn has_checked(&self) -> bool {
        matches!(self.phase, PreviewPhase::Checked { .. })
    }

    /// Grade of the current question, once checked
    pub fn is_correct(&self) -> Option<bool> {
        match self.phase {
            PreviewPhase::Checked { correct, .. } => Some(correct),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PreviewPhase::Finished
    }

    /// Checked questions may move on; short-answer questions never need checking
    pub fn can_advance(&self, question_type: QuestionType) -> bool {
        match self.phase {
            PreviewPhase::Checked { .. } => true,
            PreviewPhase::Answering { .. } => question_type == QuestionType::ShortAnswer,
            PreviewPhase::Finished => false,
        }
    }

    pub fn current_question<'a>(&self, quiz: &'a QuizData) -> Option<&'a Question> {
        quiz.questions.get(self.index)
    }

    /// Radio semantics for single-choice, checkbox semantics for
    /// multiple-choice. Ignored once the question is checked.
    pub fn select_answer(&mut self, answer_id: &str, question_type: QuestionType) {
        let PreviewPhase::Answering { selected } = &mut self.phase else {
            return;
        };
        match question_type {
            QuestionType::SingleChoice => {
                selected.clear();
                selected.insert(answer_id.to_string());
            }
            QuestionType::MultipleChoice => {
                if !selected.remove(answer_id) {
                    selected.insert(answer_id.to_string());
                }
            }
            QuestionType::ShortAnswer => {}
        }
    }

    /// Grade the selection; only an exact match with `correct_answer_ids` counts
    pub fn check_answer(&mut self, correct_answer_ids: &BTreeSet<String>) -> Result<bool, PreviewError> {
        if self.total == 0 {
            return Err(PreviewError::NoQuestions);
        }
        let selected = match &mut self.phase {
            PreviewPhase::Answering { selected } if selected.is_empty() => {
                return Err(PreviewError::EmptySelection);
            }
            PreviewPhase::Answering { selected } => std::mem::take(selected),
            PreviewPhase::Checked { .. } => return Err(PreviewError::NotAnswering),
            PreviewPhase::Finished => return Err(PreviewError::Finished),
        };
        let correct = selected == *correct_answer_ids;
        debug!("Checked question {}: correct={}", self.index, correct);
        self.phase = PreviewPhase::Checked { selected, correct };
        Ok(correct)
    }

    /// Move to the next question and persist the new index
    pub fn next_question(&mut self, question_type: QuestionType) -> Result<usize, PreviewError> {
        self.ensure_can_leave(question_type)?;
        if self.is_last_question() {
            return Err(PreviewError::LastQuestion);
        }
        self.index += 1;
        self.phase = PreviewPhase::default();
        self.persist_index();
        debug!("Advanced to question {}", self.index);
        Ok(self.index)
    }

    /// End the session from the last question
    pub fn finish_quiz(&mut self, question_type: QuestionType) -> Result<(), PreviewError> {
        self.ensure_can_leave(question_type)?;
        if !self.is_last_question() {
            return Err(PreviewError::NotLastQuestion);
        }
        self.phase = PreviewPhase::Finished;
        debug!("Quiz finished");
        Ok(())
    }

    fn ensure_can_leave(&self, question_type: QuestionType) -> Result<(), PreviewError> {
        if self.total == 0 {
            return Err(PreviewError::NoQuestions);
        }
        if self.is_finished() {
            return Err(PreviewError::Finished);
        }
        if !self.can_advance(question_type) {
            return Err(PreviewError::NotChecked);
        }
        Ok(())
    }

    /// Back to the first question with a clean slate; allowed from any state
    pub fn restart(&mut self) {
        self.index = 0;
        self.phase = PreviewPhase::default();
        self.persist_index();
        debug!("Preview restarted");
    }

    /// Adopt a new question count; returns true if the session had to restart
    pub fn reconcile(&mut self, total_questions: usize) -> bool {
        self.total = total_questions;
        if self.index_out_of_range() {
            warn!(
                "Preview index {} no longer exists ({} questions), restarting",
                self.index, total_questions
            );
            self.restart();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "progress";

    fn ids(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn session(total: usize) -> (MemoryStore, PreviewSession<MemoryStore>) {
        let store = MemoryStore::new();
        let session = PreviewSession::restore(store.clone(), KEY, total);
        (store, session)
    }

    #[test]
    fn test_starts_answering_at_zero() {
        let (_, s) = session(3);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.phase(), &PreviewPhase::default());
        assert!(!s.has_checked());
        assert_eq!(s.is_correct(), None);
        assert!(!s.is_finished());
    }

    #[test]
    fn test_single_choice_selection_replaces() {
        let (_, mut s) = session(1);
        s.select_answer("a", QuestionType::SingleChoice);
        s.select_answer("b", QuestionType::SingleChoice);
        assert_eq!(s.selected_answers(), &ids(&["b"]));
    }

    #[test]
    fn test_multiple_choice_selection_toggles() {
        let (_, mut s) = session(1);
        s.select_answer("a", QuestionType::MultipleChoice);
        s.select_answer("b", QuestionType::MultipleChoice);
        s.select_answer("a", QuestionType::MultipleChoice);
        assert_eq!(s.selected_answers(), &ids(&["b"]));
        assert!(s.is_selected("b"));
    }

    #[test]
    fn test_exact_match_is_correct() {
        let (_, mut s) = session(1);
        s.select_answer("a", QuestionType::MultipleChoice);
        s.select_answer("c", QuestionType::MultipleChoice);
        assert_eq!(s.check_answer(&ids(&["a", "c"])), Ok(true));
        assert_eq!(s.is_correct(), Some(true));
    }

    #[test]
    fn test_superset_and_subset_are_incorrect() {
        let correct = ids(&["a", "b"]);

        let (_, mut superset) = session(1);
        for id in ["a", "b", "c"] {
            superset.select_answer(id, QuestionType::MultipleChoice);
        }
        assert_eq!(superset.check_answer(&correct), Ok(false));

        let (_, mut subset) = session(1);
        subset.select_answer("a", QuestionType::MultipleChoice);
        assert_eq!(subset.check_answer(&correct), Ok(false));
    }

    #[test]
    fn test_check_requires_selection() {
        let (_, mut s) = session(1);
        assert_eq!(s.check_answer(&ids(&["a"])), Err(PreviewError::EmptySelection));
        assert!(!s.has_checked());
    }

    #[test]
    fn test_selection_locked_after_check() {
        let (_, mut s) = session(2);
        s.select_answer("a", QuestionType::SingleChoice);
        s.check_answer(&ids(&["b"])).unwrap();

        s.select_answer("b", QuestionType::SingleChoice);
        assert_eq!(s.selected_answers(), &ids(&["a"]));
        assert_eq!(s.check_answer(&ids(&["a"])), Err(PreviewError::NotAnswering));
        assert_eq!(s.is_correct(), Some(false));
    }

    #[test]
    fn test_next_requires_check_unless_short_answer() {
        let (_, mut s) = session(3);
        assert_eq!(s.next_question(QuestionType::SingleChoice), Err(PreviewError::NotChecked));
        assert_eq!(s.next_question(QuestionType::ShortAnswer), Ok(1));
    }

    #[test]
    fn test_next_resets_and_persists() {
        let (store, mut s) = session(3);
        s.select_answer("a", QuestionType::SingleChoice);
        s.check_answer(&ids(&["a"])).unwrap();

        assert_eq!(s.next_question(QuestionType::SingleChoice), Ok(1));
        assert!(s.selected_answers().is_empty());
        assert!(!s.has_checked());
        assert_eq!(s.is_correct(), None);
        assert_eq!(load_or(&store, KEY, 0usize), 1);
    }

    #[test]
    fn test_cannot_advance_past_last() {
        let (_, mut s) = session(1);
        assert_eq!(s.next_question(QuestionType::ShortAnswer), Err(PreviewError::LastQuestion));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_finish_only_on_last_checked_question() {
        let (_, mut s) = session(2);
        assert_eq!(s.finish_quiz(QuestionType::ShortAnswer), Err(PreviewError::NotLastQuestion));

        s.next_question(QuestionType::ShortAnswer).unwrap();
        assert_eq!(s.finish_quiz(QuestionType::MultipleChoice), Err(PreviewError::NotChecked));

        s.select_answer("x", QuestionType::MultipleChoice);
        s.check_answer(&ids(&["x"])).unwrap();
        assert_eq!(s.finish_quiz(QuestionType::MultipleChoice), Ok(()));
        assert!(s.is_finished());
        assert!(s.selected_answers().is_empty());
        assert_eq!(s.finish_quiz(QuestionType::MultipleChoice), Err(PreviewError::Finished));
        assert_eq!(s.next_question(QuestionType::ShortAnswer), Err(PreviewError::Finished));
    }

    #[test]
    fn test_restart_from_finished() {
        let (store, mut s) = session(2);
        s.next_question(QuestionType::ShortAnswer).unwrap();
        s.finish_quiz(QuestionType::ShortAnswer).unwrap();

        s.restart();
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_finished());
        assert_eq!(s.phase(), &PreviewPhase::default());
        assert_eq!(load_or(&store, KEY, 9usize), 0);
    }

    #[test]
    fn test_restore_resumes_index() {
        let store = MemoryStore::new();
        save(&store, KEY, &2usize);
        let s = PreviewSession::restore(store, KEY, 4);
        assert_eq!(s.current_index(), 2);
        assert!(!s.has_checked());
    }

    #[test]
    fn test_restore_out_of_range_restarts() {
        let store = MemoryStore::new();
        save(&store, KEY, &5usize);
        let s = PreviewSession::restore(store.clone(), KEY, 2);
        assert_eq!(s.current_index(), 0);
        assert_eq!(load_or(&store, KEY, 9usize), 0);
    }

    #[test]
    fn test_reconcile_after_shrink() {
        let (_, mut s) = session(3);
        s.next_question(QuestionType::ShortAnswer).unwrap();
        s.next_question(QuestionType::ShortAnswer).unwrap();

        assert!(!s.reconcile(3));
        assert!(s.reconcile(2));
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.total_questions(), 2);
    }

    #[test]
    fn test_empty_quiz_rejects_transitions() {
        let (_, mut s) = session(0);
        assert!(!s.is_last_question());
        s.select_answer("a", QuestionType::SingleChoice);
        assert_eq!(s.check_answer(&ids(&["a"])), Err(PreviewError::NoQuestions));
        assert_eq!(s.next_question(QuestionType::ShortAnswer), Err(PreviewError::NoQuestions));
        assert_eq!(s.finish_quiz(QuestionType::ShortAnswer), Err(PreviewError::NoQuestions));
    }
}
