//! The board editor page: preview on top, controls below.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::action_bar::ActionBar;
use crate::components::app_footer::AppFooter;
use crate::components::app_header::AppHeader;
use crate::components::board_view::BoardView;
use crate::components::color_swatches::ColorSwatches;
use crate::components::font_picker::FontPicker;
use crate::components::kind_toggle::KindToggle;
use crate::components::style_controls::StyleControls;
use crate::components::text_controls::TextControls;

#[component]
pub fn EditorPage() -> impl IntoView {
    // Shared between the action bar (which owns the upload flow) and the
    // text controls (whose clear button must reset the file selection).
    let file_input: NodeRef<Input> = NodeRef::new();

    view! {
        <div class="page" dir="rtl">
            <AppHeader />
            <main class="page__main">
                <BoardView />
                <div class="controls">
                    <KindToggle />
                    <TextControls file_input=file_input />
                    <FontPicker />
                    <ColorSwatches />
                    <StyleControls />
                    <ActionBar file_input=file_input />
                </div>
            </main>
            <AppFooter />
        </div>
    }
}
