//! Text entry plus the clear-everything button.

use leptos::html::Input;
use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::util::overlay::revoke_overlay;

/// Textarea bound to the board text, with a clear button that resets the
/// text and the background overlay in one step.
#[component]
pub fn TextControls(file_input: NodeRef<Input>) -> impl IntoView {
    let board_state = expect_context::<RwSignal<BoardState>>();

    let on_input = move |ev| {
        board_state.update(|state| state.set_text(event_target_value(&ev)));
    };

    let on_clear = move |_| {
        let removed = board_state.try_update(BoardState::clear).flatten();
        if let Some(overlay) = removed {
            revoke_overlay(&overlay);
        }
        // Resetting the input lets the same file be re-uploaded afterwards.
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let entry_placeholder = move || {
        if board_state.get().kind == board::model::BoardKind::Chalk {
            "ابدأ الكتابة بالطباشير الأبيض..."
        } else {
            "ابدأ الكتابة بقلم السبورة..."
        }
    };

    view! {
        <section class="panel panel--text">
            <div class="panel__header">
                <label class="panel__label" for="board-text">"نص السبورة"</label>
                <button class="btn btn--ghost" on:click=on_clear>"مسح الكل"</button>
            </div>
            <textarea
                id="board-text"
                class="panel__textarea"
                rows="4"
                dir="rtl"
                placeholder=entry_placeholder
                prop:value=move || board_state.get().text
                on:input=on_input
            ></textarea>
        </section>
    }
}
