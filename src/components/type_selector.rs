//! Type Selector Component
//!
//! Question type selector buttons.

use leptos::prelude::*;
use quiz_core::QuestionType;

/// Type selector buttons for a question
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<QuestionType>,
    #[prop(into)] label: String,
    on_change: impl Fn(QuestionType) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector" role="group" aria-label=label>
            {QuestionType::ALL.iter().map(|&question_type| {
                let is_selected = move || current_type.get() == question_type;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        aria-pressed=move || is_selected().to_string()
                        on:click=move |_| {
                            if !is_selected() {
                                on_change(question_type);
                            }
                        }
                    >
                        {question_type.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
