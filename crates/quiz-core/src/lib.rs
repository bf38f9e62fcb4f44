//! Quiz Core
//!
//! Data model, mutators, validation and the preview session state machine
//! for the quiz builder. This crate has NO browser dependencies; the
//! frontend plugs its own storage in through [`KeyValueStore`].

mod error;
mod ids;
mod models;
mod preview;
mod quiz;
mod storage;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{PreviewError, StoreError, StoreResult};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use models::{Answer, Question, QuestionType, QuizData, QuizMode};
pub use preview::{PreviewPhase, PreviewSession};
pub use quiz::{
    add_answer_to_question, add_question, can_remove_answer, create_default_answer,
    create_default_question, remove_answer_from_question, remove_question,
    update_answer_correctness, update_answer_text, update_question_text, update_question_type,
    MIN_ANSWERS,
};
pub use storage::{load_or, save, KeyValueStore, MemoryStore, StorageKeys};
pub use validation::{validate, AnswerValidation, QuestionValidation, QuizValidation};
