//! Answer Row Component
//!
//! Correctness toggle, text input and remove button for one answer.

use leptos::prelude::*;
use quiz_core::{
    can_remove_answer, remove_answer_from_question, update_answer_correctness, update_answer_text,
    Question, QuestionType,
};

use crate::context::AppContext;

#[component]
pub fn AnswerRow(question_id: String, answer_id: String, question: Memo<Option<Question>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ids = StoredValue::new((question_id.clone(), answer_id));

    let answer = Memo::new(move |_| {
        ids.with_value(|(_, aid)| question.with(|q| q.as_ref().and_then(|q| q.answer(aid).cloned())))
    });
    let is_single = move || {
        question.with(|q| q.as_ref().is_some_and(|q| q.question_type == QuestionType::SingleChoice))
    };
    let removable = move || question.with(|q| q.as_ref().is_some_and(can_remove_answer));
    let text_empty = move || {
        ids.with_value(|(qid, aid)| {
            ctx.validation.with(|v| v.question(qid).is_some_and(|qv| qv.answer_text_empty(aid)))
        })
    };

    view! {
        <div class="answer-row">
            <input
                type=move || if is_single() { "radio" } else { "checkbox" }
                name=question_id
                aria-label="Correct answer"
                prop:checked=move || answer.with(|a| a.as_ref().is_some_and(|a| a.is_correct))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let (qid, aid) = ids.get_value();
                    ctx.apply(move |qs| update_answer_correctness(qs, &qid, &aid, checked));
                }
            />
            <input
                type="text"
                class="answer-text"
                placeholder="Answer text"
                aria-invalid=move || text_empty().to_string()
                prop:value=move || answer.with(|a| a.as_ref().map(|a| a.answer_text.clone()).unwrap_or_default())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    let (qid, aid) = ids.get_value();
                    ctx.apply(move |qs| update_answer_text(qs, &qid, &aid, &text));
                }
            />
            <button
                type="button"
                class="remove-answer-btn"
                aria-label="Remove answer"
                disabled=move || !removable()
                on:click=move |_| {
                    let (qid, aid) = ids.get_value();
                    ctx.apply(move |qs| remove_answer_from_question(qs, &qid, &aid));
                }
            >
                "−"
            </button>
            <Show when=text_empty>
                <p class="field-error" role="alert">"Answer text cannot be blank."</p>
            </Show>
        </div>
    }
}
