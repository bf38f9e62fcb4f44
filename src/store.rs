//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The quiz and
//! the current mode live in browser localStorage and are written back
//! after every change.

use leptos::prelude::*;
use quiz_core::{
    load_or, save, KeyValueStore, Question, QuizData, QuizMode, StorageKeys, StoreError,
    StoreResult,
};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct QuizState {
    /// All questions, in quiz order
    pub questions: Vec<Question>,
    /// Edit or preview
    pub mode: QuizMode,
}

/// Type alias for the store
pub type QuizStore = Store<QuizState>;

/// Keys used in localStorage
pub fn storage_keys() -> StorageKeys {
    StorageKeys::default()
}

/// Browser localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// Read the persisted state, falling back to an empty quiz in edit mode
pub fn load_quiz_state() -> QuizState {
    let keys = storage_keys();
    let quiz = load_or(&BrowserStorage, &keys.quiz_data, QuizData::default());
    let mode = load_or(&BrowserStorage, &keys.mode, QuizMode::default());
    log::info!("Loaded {} questions, mode {:?}", quiz.len(), mode);
    QuizState {
        questions: quiz.questions,
        mode,
    }
}

/// Save questions and mode whenever they change
pub fn persist_quiz_state(store: QuizStore) {
    let keys = storage_keys();
    let data_key = keys.quiz_data;
    Effect::new(move |_| {
        let quiz = QuizData::new(store.questions().get());
        save(&BrowserStorage, &data_key, &quiz);
    });
    let mode_key = keys.mode;
    Effect::new(move |_| {
        save(&BrowserStorage, &mode_key, &store.mode().get());
    });
}

// ========================
// Store Helper Functions
// ========================

/// Replace the question list with the result of a mutator
pub fn store_apply(store: &QuizStore, mutate: impl FnOnce(&[Question]) -> Vec<Question>) {
    store.questions().update(|questions| *questions = mutate(questions));
}
