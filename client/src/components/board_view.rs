//! The live board: the DOM rendering of `BoardState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This region (identified by [`BOARD_REGION_ID`]) is what the export
//! pipeline measures before rasterizing. Layer order matches
//! `board::scene::build_scene` back to front: overlay, chalk texture, user
//! text, signature.

use board::consts::SIGNATURE_TEXT;
use board::model::{BoardKind, OverlaySource};
use leptos::prelude::*;

use crate::export::pipeline::BOARD_REGION_ID;
use crate::state::board::BoardState;

/// Pure presentation: a fixed-size visual region driven entirely by state.
#[component]
pub fn BoardView() -> impl IntoView {
    let board_state = expect_context::<RwSignal<BoardState>>();

    let is_chalk = move || board_state.get().kind == BoardKind::Chalk;

    let board_class = move || {
        if is_chalk() { "board board--chalk" } else { "board board--white" }
    };

    // The stylesheet caps the region at 95vw; the requested dimensions win
    // everywhere else, including in the export.
    let board_style = move || {
        let state = board_state.get();
        format!("width: {}px; height: {}px;", state.board_width, state.board_height)
    };

    let text_style = move || {
        let state = board_state.get();
        format!(
            "color: {}; font-size: {}px; line-height: {}; font-family: \"{}\", sans-serif;",
            state.ink, state.font_px, state.line_height, state.font_family
        )
    };

    let display_text = move || {
        let state = board_state.get();
        if state.text.is_empty() { state.kind.placeholder().to_owned() } else { state.text }
    };

    let stroke_class = move || if is_chalk() { "chalk-stroke" } else { "marker-stroke" };

    view! {
        <div class="board-stage">
            <div id=BOARD_REGION_ID class=board_class style=board_style>
                {move || board_state.get().overlay.map(overlay_layer)}

                {move || {
                    is_chalk()
                        .then(|| {
                            view! {
                                <div class="board__ghosting"></div>
                                <div class="board__dust"></div>
                                <div class="board__grain"></div>
                            }
                        })
                }}
                {move || (!is_chalk()).then(|| view! { <div class="board__gloss"></div> })}

                <div class=move || format!("board__text {}", stroke_class()) style=text_style>
                    {display_text}
                </div>

                <div class=move || format!("board__signature {}", stroke_class())>
                    {SIGNATURE_TEXT}
                </div>
            </div>
        </div>
    }
}

/// Background overlay preview. PDFs get an embedded viewer here but are
/// excluded from exports; images are drawn in both places.
fn overlay_layer(source: OverlaySource) -> impl IntoView {
    let url = source.url.clone();
    view! {
        <div class="board__overlay">
            {if source.is_pdf() {
                view! { <embed src=url type="application/pdf" class="board__overlay-doc" /> }.into_any()
            } else {
                view! { <img src=url alt="background" class="board__overlay-img" /> }.into_any()
            }}
        </div>
    }
}
