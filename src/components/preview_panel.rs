//! Preview Panel Component
//!
//! Walks through the quiz one question at a time. Progress (the question
//! index) is kept in localStorage by the session itself.

use leptos::prelude::*;
use quiz_core::{PreviewError, PreviewSession, Question, QuestionType, QuizData};

use crate::context::AppContext;
use crate::store::{storage_keys, BrowserStorage, QuizStateStoreFields};

type Session = RwSignal<PreviewSession<BrowserStorage>>;

/// Log rejected transitions; the buttons normally prevent them
fn report(action: &str, result: Result<(), PreviewError>) {
    if let Err(e) = result {
        log::warn!("Preview {} ignored: {}", action, e);
    }
}

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let quiz = Memo::new(move |_| QuizData::new(ctx.store.questions().get()));
    let session: Session = RwSignal::new(PreviewSession::restore(
        BrowserStorage,
        storage_keys().progress,
        quiz.with_untracked(|q| q.len()),
    ));

    // Questions can disappear between sessions; never point past the end
    Effect::new(move |_| {
        let total = quiz.with(|q| q.len());
        if session.with_untracked(|s| s.total_questions() != total) {
            session.update(|s| {
                s.reconcile(total);
            });
        }
    });

    let is_empty = Memo::new(move |_| quiz.with(|q| q.is_empty()));
    let finished = Memo::new(move |_| session.with(|s| s.is_finished()));
    let current = Memo::new(move |_| quiz.with(|q| session.with(|s| s.current_question(q).cloned())));
    let restart = move |_: web_sys::MouseEvent| session.update(|s| s.restart());

    view! {
        <section id="preview-panel" role="tabpanel" aria-labelledby="preview-tab" aria-live="polite">
            {move || {
                if is_empty.get() {
                    return view! { <p class="preview-empty">"No questions to preview yet."</p> }.into_any();
                }
                if finished.get() {
                    return view! {
                        <div class="quiz-finished">
                            <h2>"QUIZ FINISHED"</h2>
                            <button type="button" class="primary-btn" on:click=restart>"Start Again?"</button>
                        </div>
                    }.into_any();
                }
                match current.get() {
                    Some(question) => view! { <PreviewQuestion question=question session=session /> }.into_any(),
                    None => ().into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn PreviewQuestion(question: Question, session: Session) -> impl IntoView {
    let question_type = question.question_type;
    let correct_ids = StoredValue::new(question.correct_answer_ids());
    let index = move || session.with(|s| s.current_index());
    let total = move || session.with(|s| s.total_questions());
    let has_checked = move || session.with(|s| s.has_checked());
    let can_advance = move || session.with(|s| s.can_advance(question_type));
    let is_last = move || session.with(|s| s.is_last_question());

    let check = move |_: web_sys::MouseEvent| {
        session.update(|s| {
            let result = correct_ids.with_value(|ids| s.check_answer(ids)).map(|_| ());
            report("check", result);
        });
    };
    let next = move |_: web_sys::MouseEvent| session.update(|s| report("next", s.next_question(question_type).map(|_| ())));
    let finish = move |_: web_sys::MouseEvent| session.update(|s| report("finish", s.finish_quiz(question_type)));

    let answers = if question_type == QuestionType::ShortAnswer {
        view! {
            <input type="text" class="short-answer-input" aria-label="Your answer" placeholder="Type your answer..." />
        }
        .into_any()
    } else {
        let input_type = if question_type == QuestionType::SingleChoice { "radio" } else { "checkbox" };
        let group = question.id.clone();
        view! {
            <fieldset class="preview-answers">
                <legend class="sr-only">"Answer options for question " {move || index() + 1}</legend>
                {question.answers.iter().map(|answer| {
                    let id = StoredValue::new(answer.id.clone());
                    let is_correct = answer.is_correct;
                    let selected = move || id.with_value(|id| session.with(|s| s.is_selected(id)));
                    let item_class = move || match (has_checked(), is_correct, selected()) {
                        (true, true, _) => "preview-answer correct",
                        (true, false, true) => "preview-answer wrong",
                        (false, _, true) => "preview-answer selected",
                        _ => "preview-answer",
                    };
                    view! {
                        <label class=item_class>
                            <input
                                type=input_type
                                name=group.clone()
                                prop:checked=selected
                                disabled=has_checked
                                on:change=move |_| {
                                    id.with_value(|id| session.update(|s| s.select_answer(id, question_type)));
                                }
                            />
                            <span>{answer.answer_text.clone()}</span>
                        </label>
                    }
                }).collect_view()}
            </fieldset>
        }
        .into_any()
    };

    view! {
        <div class="preview-question">
            <div>
                <p class="preview-question-number">"Question " {move || index() + 1} ":"</p>
                <h2>{question.question_text.clone()}</h2>
            </div>

            {answers}

            <Show when=has_checked>
                <output class=move || {
                    if session.with(|s| s.is_correct() == Some(true)) { "result correct" } else { "result wrong" }
                }>
                    {move || if session.with(|s| s.is_correct() == Some(true)) { "Correct!" } else { "Incorrect." }}
                </output>
            </Show>

            <div class="preview-footer">
                <p class="preview-progress">"Question " {move || index() + 1} " of " {total}</p>
                <div class="preview-actions">
                    <Show when=move || question_type != QuestionType::ShortAnswer && !has_checked()>
                        <button
                            type="button"
                            class="primary-btn"
                            disabled=move || session.with(|s| s.selected_answers().is_empty())
                            on:click=check
                        >
                            "Check answer"
                        </button>
                    </Show>
                    <Show when=move || can_advance() && !is_last()>
                        <button type="button" class="primary-btn" on:click=next>"Next question"</button>
                    </Show>
                    <Show when=move || can_advance() && is_last()>
                        <button type="button" class="primary-btn" on:click=finish>"Finish"</button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
