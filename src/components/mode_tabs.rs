//! Mode Tabs Component
//!
//! Edit / Preview tab bar. Preview stays disabled until the quiz is valid.

use leptos::prelude::*;
use quiz_core::QuizMode;

use crate::context::AppContext;

const MODES: &[(QuizMode, &str, &str)] = &[
    (QuizMode::Edit, "edit-tab", "EDIT"),
    (QuizMode::Preview, "preview-tab", "PREVIEW"),
];

#[component]
pub fn ModeTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="mode-tabs" aria-label="Quiz modes">
            <div role="tablist" aria-label="Quiz mode tabs">
                {MODES.iter().map(|&(mode, id, label)| {
                    let is_active = move || ctx.mode() == mode;
                    let blocked = move || mode == QuizMode::Preview && !ctx.validation.get().can_preview();
                    view! {
                        <button
                            id=id
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            class=move || match (is_active(), blocked()) {
                                (true, _) => "mode-tab active",
                                (false, true) => "mode-tab blocked",
                                (false, false) => "mode-tab",
                            }
                            disabled=blocked
                            on:click=move |_| ctx.switch_mode(mode)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}
