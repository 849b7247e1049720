//! Chalkboard / whiteboard mode switch.

use board::model::BoardKind;
use leptos::prelude::*;

use crate::state::board::BoardState;

/// Two-way toggle. Switching modes resets the ink to the new surface's
/// default (a chalkboard never keeps a navy marker colour and vice versa);
/// clicking the already-active mode is a no-op.
#[component]
pub fn KindToggle() -> impl IntoView {
    let board_state = expect_context::<RwSignal<BoardState>>();

    let select = move |kind: BoardKind| {
        if board_state.get_untracked().kind != kind {
            board_state.update(BoardState::toggle_kind);
        }
    };

    let class_for = move |kind: BoardKind| {
        if board_state.get().kind == kind { "btn btn--mode is-active" } else { "btn btn--mode" }
    };

    view! {
        <div class="mode-toggle" role="group" aria-label="نوع السبورة">
            <button class=move || class_for(BoardKind::Chalk) on:click=move |_| select(BoardKind::Chalk)>
                "سبورة طباشير"
            </button>
            <button class=move || class_for(BoardKind::White) on:click=move |_| select(BoardKind::White)>
                "سبورة بيضاء"
            </button>
        </div>
    }
}
