//! UI Components
//!
//! Reusable Leptos components.

mod answer_row;
mod delete_confirm_button;
mod editor_panel;
mod mode_tabs;
mod preview_panel;
mod question_card;
mod type_selector;

pub use answer_row::AnswerRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_panel::EditorPanel;
pub use mode_tabs::ModeTabs;
pub use preview_panel::PreviewPanel;
pub use question_card::QuestionCard;
pub use type_selector::TypeSelector;
