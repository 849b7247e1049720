//! Numeric styling controls: font size, line spacing, board dimensions.
//!
//! Each control is a paired slider and number input over the same state
//! field. Slider ranges are the UI envelope; typed values go through the
//! parsers in `util::controls`, so out-of-range text falls back to the
//! documented floors rather than erroring.

use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::util::controls::{parse_dimension_px, parse_font_px, parse_line_height};

#[component]
pub fn StyleControls() -> impl IntoView {
    let board_state = expect_context::<RwSignal<BoardState>>();

    let on_font = move |ev| {
        let px = parse_font_px(&event_target_value(&ev));
        board_state.update(|state| state.set_font_px(px));
    };
    let on_spacing = move |ev| {
        let factor = parse_line_height(&event_target_value(&ev));
        board_state.update(|state| state.set_line_height(factor));
    };
    let on_width = move |ev| {
        let px = parse_dimension_px(&event_target_value(&ev));
        board_state.update(|state| state.set_board_width(px));
    };
    let on_height = move |ev| {
        let px = parse_dimension_px(&event_target_value(&ev));
        board_state.update(|state| state.set_board_height(px));
    };

    view! {
        <section class="panel panel--style">
            <div class="control">
                <label class="control__label" for="ctl-font">"حجم الخط"</label>
                <input
                    id="ctl-font"
                    type="range"
                    min="8"
                    max="400"
                    step="1"
                    prop:value=move || board_state.get().font_px.to_string()
                    on:input=on_font
                />
                <input
                    type="number"
                    class="control__number"
                    min="8"
                    prop:value=move || board_state.get().font_px.to_string()
                    on:change=on_font
                />
            </div>

            <div class="control">
                <label class="control__label" for="ctl-spacing">"تباعد الأسطر"</label>
                <input
                    id="ctl-spacing"
                    type="range"
                    min="0.5"
                    max="4.0"
                    step="0.1"
                    prop:value=move || format!("{:.1}", board_state.get().line_height)
                    on:input=on_spacing
                />
                <input
                    type="number"
                    class="control__number"
                    min="0.5"
                    step="0.1"
                    prop:value=move || format!("{:.1}", board_state.get().line_height)
                    on:change=on_spacing
                />
            </div>

            <div class="control">
                <label class="control__label" for="ctl-width">"عرض السبورة"</label>
                <input
                    id="ctl-width"
                    type="range"
                    min="100"
                    max="2000"
                    step="10"
                    prop:value=move || board_state.get().board_width.to_string()
                    on:input=on_width
                />
                <input
                    type="number"
                    class="control__number"
                    min="100"
                    prop:value=move || board_state.get().board_width.to_string()
                    on:change=on_width
                />
            </div>

            <div class="control">
                <label class="control__label" for="ctl-height">"ارتفاع السبورة"</label>
                <input
                    id="ctl-height"
                    type="range"
                    min="100"
                    max="2000"
                    step="10"
                    prop:value=move || board_state.get().board_height.to_string()
                    on:input=on_height
                />
                <input
                    type="number"
                    class="control__number"
                    min="100"
                    prop:value=move || board_state.get().board_height.to_string()
                    on:change=on_height
                />
            </div>
        </section>
    }
}
