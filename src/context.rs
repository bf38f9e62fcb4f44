//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use quiz_core::{add_question, validate, Question, QuizData, QuizMode, QuizValidation, UuidGenerator};

use crate::store::{store_apply, QuizStore, QuizStateStoreFields};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persisted quiz state
    pub store: QuizStore,
    /// Validity of the current questions, recomputed on every change
    pub validation: Memo<QuizValidation>,
}

impl AppContext {
    pub fn new(store: QuizStore) -> Self {
        let validation = Memo::new(move |_| validate(&QuizData::new(store.questions().get())));
        Self { store, validation }
    }

    pub fn mode(&self) -> QuizMode {
        self.store.mode().get()
    }

    /// Switch panels; preview is refused while the quiz is invalid
    pub fn switch_mode(&self, mode: QuizMode) {
        if mode == QuizMode::Preview && !self.validation.get_untracked().can_preview() {
            log::warn!("Preview blocked: quiz is not valid");
            return;
        }
        self.store.mode().set(mode);
    }

    /// Apply a question mutator
    pub fn apply(&self, mutate: impl FnOnce(&[Question]) -> Vec<Question>) {
        store_apply(&self.store, mutate);
    }

    /// Append a default question and return its id
    pub fn add_question(&self) -> String {
        let mut added = String::new();
        self.apply(|questions| {
            let (updated, id) = add_question(questions, &UuidGenerator);
            added = id;
            updated
        });
        log::debug!("Added question {}", added);
        added
    }
}
