//! Arabic typeface picker.

use board::model::FONT_CATALOG;
use leptos::prelude::*;

use crate::state::board::BoardState;

/// One button per catalog face, rendered in its own typeface so the picker
/// doubles as a specimen sheet.
#[component]
pub fn FontPicker() -> impl IntoView {
    let board_state = expect_context::<RwSignal<BoardState>>();

    view! {
        <section class="panel panel--fonts">
            <span class="panel__label">"نوع الخط"</span>
            <div class="font-grid">
                {FONT_CATALOG
                    .iter()
                    .copied()
                    .map(|face| {
                        let family = face.family;
                        let on_pick = move |_| {
                            board_state.update(|state| state.set_font_family(family));
                        };
                        let button_class = move || {
                            if board_state.get().font_family == family {
                                format!("btn btn--font is-active {}", face.css_class)
                            } else {
                                format!("btn btn--font {}", face.css_class)
                            }
                        };
                        view! {
                            <button class=button_class on:click=on_pick>
                                {face.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
