//! Quiz Builder App
//!
//! Header with mode tabs, then either the editor or the preview.

use leptos::prelude::*;
use quiz_core::QuizMode;
use reactive_stores::Store;

use crate::components::{EditorPanel, ModeTabs, PreviewPanel};
use crate::context::AppContext;
use crate::store::{load_quiz_state, persist_quiz_state, QuizStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(load_quiz_state());
    persist_quiz_state(store);

    let ctx = AppContext::new(store);
    // A stored preview mode is only honoured for a valid quiz
    if store.mode().get_untracked() == QuizMode::Preview && !ctx.validation.get_untracked().can_preview() {
        store.mode().set(QuizMode::Edit);
    }

    provide_context(ctx);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 id="app-logo">"Quiz Builder"</h1>
                <ModeTabs />
            </header>

            <main class="main-content">
                {move || match ctx.mode() {
                    QuizMode::Edit => view! { <EditorPanel /> }.into_any(),
                    QuizMode::Preview => view! { <PreviewPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
