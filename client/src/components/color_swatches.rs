//! Ink colour swatches, per board kind.

use leptos::prelude::*;

use crate::state::board::BoardState;

/// Six fixed swatches; the palette follows the active board kind so chalk
/// colours and marker colours never mix.
#[component]
pub fn ColorSwatches() -> impl IntoView {
    let board_state = expect_context::<RwSignal<BoardState>>();

    view! {
        <section class="panel panel--colors">
            <span class="panel__label">"لون الكتابة"</span>
            <div class="swatch-row">
                {move || {
                    board_state
                        .get()
                        .kind
                        .swatches()
                        .iter()
                        .map(|&hex| {
                            let on_pick = move |_| {
                                board_state.update(|state| state.set_ink(hex));
                            };
                            let swatch_class = move || {
                                if board_state.get().ink == hex {
                                    "swatch is-active"
                                } else {
                                    "swatch"
                                }
                            };
                            view! {
                                <button
                                    class=swatch_class
                                    style=format!("background-color: {hex};")
                                    aria-label=hex
                                    on:click=on_pick
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
