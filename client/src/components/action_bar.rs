//! The three board actions: background upload, AI suggestion, 4K export.
//!
//! DESIGN
//! ======
//! Suggestion and export are async and re-entrant-hostile, so each gets a
//! busy flag in `UiState` checked before spawning and cleared on every
//! completion path before any outcome is surfaced. The suggestion path never
//! fails (`fetch_suggestion` degrades to a fallback quote); the export path
//! reports terminal failures through a single alert.

use leptos::html::Input;
use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::state::ui::UiState;

#[component]
pub fn ActionBar(file_input: NodeRef<Input>) -> impl IntoView {
    let board_state = expect_context::<RwSignal<BoardState>>();
    let ui_state = expect_context::<RwSignal<UiState>>();

    let on_upload_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::util::overlay::{create_overlay, revoke_overlay};

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Some(source) = create_overlay(&file) {
                let replaced = board_state.try_update(|state| state.set_overlay(source)).flatten();
                if let Some(previous) = replaced {
                    revoke_overlay(&previous);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_suggest = move |_| {
        if ui_state.get_untracked().loading_suggestion {
            return;
        }
        ui_state.update(|ui| ui.loading_suggestion = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let context = board_state.get_untracked().text;
            let suggestion = crate::net::suggestion::fetch_suggestion(&context).await;
            board_state.update(|state| state.set_text(suggestion));
            ui_state.update(|ui| ui.loading_suggestion = false);
        });
        #[cfg(not(feature = "hydrate"))]
        ui_state.update(|ui| ui.loading_suggestion = false);
    };

    let on_export = move |_| {
        if ui_state.get_untracked().is_exporting {
            return;
        }
        ui_state.update(|ui| ui.is_exporting = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::export::pipeline::{export_board, terminal_message};

            let snapshot = board_state.get_untracked().snapshot();
            let result = export_board(snapshot).await;
            // Clear the busy flag before surfacing anything so a dismissed
            // alert leaves the button usable.
            ui_state.update(|ui| ui.is_exporting = false);
            if let Err(err) = result {
                log::error!("export failed: {err}");
                let message = terminal_message(&err);
                if !message.is_empty() {
                    if let Some(window) = web_sys::window() {
                        if window.alert_with_message(message).is_err() {
                            log::error!("export failure alert could not be shown");
                        }
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        ui_state.update(|ui| ui.is_exporting = false);
    };

    view! {
        <section class="panel panel--actions">
            <input
                type="file"
                accept="image/*,application/pdf"
                class="hidden-input"
                node_ref=file_input
                on:change=on_file_change
            />
            <button class="btn btn--upload" on:click=on_upload_click>
                "خلفية مخصصة"
            </button>
            <button
                class="btn btn--suggest"
                disabled=move || ui_state.get().loading_suggestion
                on:click=on_suggest
            >
                {move || {
                    if ui_state.get().loading_suggestion { "جاري التفكير..." } else { "اقتراح ذكي ✨" }
                }}
            </button>
            <button
                class="btn btn--export"
                disabled=move || ui_state.get().is_exporting
                on:click=on_export
            >
                {move || {
                    if ui_state.get().is_exporting {
                        "جاري المعالجة..."
                    } else {
                        "تحميل كصورة 4K بدقة عالية"
                    }
                }}
            </button>
        </section>
    }
}
