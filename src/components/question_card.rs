//! Question Card Component
//!
//! Editor for one question: type, text, answers and delete.

use leptos::prelude::*;
use quiz_core::{
    add_answer_to_question, remove_question, update_question_text, update_question_type, QuestionType,
    UuidGenerator,
};

use crate::components::{AnswerRow, DeleteConfirmButton, TypeSelector};
use crate::context::AppContext;
use crate::store::QuizStateStoreFields;

#[component]
pub fn QuestionCard(question_id: String, index: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let number = index + 1;
    let qid = StoredValue::new(question_id);

    let question = Memo::new(move |_| {
        qid.with_value(|id| ctx.store.questions().with(|qs| qs.iter().find(|q| &q.id == id).cloned()))
    });
    let question_type = Signal::derive(move || {
        question.with(|q| q.as_ref().map(|q| q.question_type).unwrap_or_default())
    });
    let validation = Memo::new(move |_| {
        qid.with_value(|id| ctx.validation.with(|v| v.question(id).cloned()))
    });
    let text_empty = move || validation.with(|v| v.as_ref().is_some_and(|v| v.question_text_empty));
    let missing_correct = move || validation.with(|v| v.as_ref().is_some_and(|v| !v.has_correct_answer));
    let error_id = format!("q{}-error", number);

    let on_type_change = move |new_type: QuestionType| {
        let id = qid.get_value();
        ctx.apply(move |qs| update_question_type(qs, &id, new_type));
    };
    let on_delete = Callback::new(move |_| {
        let id = qid.get_value();
        log::info!("Deleting question {}", id);
        ctx.apply(move |qs| remove_question(qs, &id));
    });

    view! {
        <form class="question-card" on:submit=|ev| ev.prevent_default()>
            <div class="question-card-header">
                <h6>"Question " {number}</h6>
                <TypeSelector
                    current_type=question_type
                    label=format!("Question {} type", number)
                    on_change=on_type_change
                />
                <DeleteConfirmButton
                    label="Delete question"
                    prompt="Delete this question and all its answers?"
                    on_confirm=on_delete
                />
            </div>

            <div class="question-text-row">
                <input
                    type="text"
                    placeholder="Enter your question"
                    aria-label=format!("Question {} text", number)
                    aria-invalid=move || text_empty().to_string()
                    prop:value=move || question.with(|q| q.as_ref().map(|q| q.question_text.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        let id = qid.get_value();
                        ctx.apply(move |qs| update_question_text(qs, &id, &text));
                    }
                />
                <Show when=text_empty>
                    <p id=error_id.clone() class="field-error" role="alert">"Question text cannot be blank."</p>
                </Show>
            </div>

            <Show
                when=move || question_type.get() != QuestionType::ShortAnswer
                fallback=|| view! { <p class="short-answer-note">"Short-text questions are answered freely and not graded."</p> }
            >
                <fieldset class="answer-list">
                    <legend>"Answer options for Question " {number}</legend>
                    <For
                        each=move || question.with(|q| q.as_ref().map(|q| q.answers.clone()).unwrap_or_default())
                        key=|answer| answer.id.clone()
                        children=move |answer| view! {
                            <AnswerRow question_id=qid.get_value() answer_id=answer.id question=question />
                        }
                    />
                    <Show when=missing_correct>
                        <p class="field-error" role="alert">"Mark at least one correct answer."</p>
                    </Show>
                    <button
                        type="button"
                        class="add-answer-btn"
                        aria-label=format!("Add answer option to Question {}", number)
                        on:click=move |_| {
                            let id = qid.get_value();
                            ctx.apply(move |qs| add_answer_to_question(qs, &id, &UuidGenerator));
                        }
                    >
                        "Add answer +"
                    </button>
                </fieldset>
            </Show>
        </form>
    }
}
