//! Editor Panel Component
//!
//! Question list with add buttons. Each question is a [`QuestionCard`].

use leptos::prelude::*;

use crate::components::QuestionCard;
use crate::context::AppContext;
use crate::store::QuizStateStoreFields;

#[component]
pub fn EditorPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let is_empty = move || ctx.store.questions().with(|questions| questions.is_empty());

    view! {
        <section id="editor-panel" role="tabpanel" aria-labelledby="edit-tab" aria-live="polite">
            <Show
                when=move || !is_empty()
                fallback=move || view! {
                    <div class="editor-empty">
                        <h6>"Start by adding your first question."</h6>
                        <button type="button" class="add-question-btn" on:click=move |_| { ctx.add_question(); }>
                            "Add Question +"
                        </button>
                    </div>
                }
            >
                <For
                    each=move || ctx.store.questions().get().into_iter().enumerate()
                    key=|(index, question)| (*index, question.id.clone())
                    children=move |(index, question)| view! {
                        <QuestionCard question_id=question.id index=index />
                    }
                />
                // Another question only once the current ones are complete
                <button
                    type="button"
                    class="add-question-btn"
                    disabled=move || !ctx.validation.get().quiz_valid
                    on:click=move |_| {
                        if ctx.validation.get_untracked().quiz_valid {
                            ctx.add_question();
                        }
                    }
                >
                    "Add Question +"
                </button>
            </Show>
        </section>
    }
}
