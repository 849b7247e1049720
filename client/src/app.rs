//! Application root: owns the two state aggregates and mounts the editor.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::editor::EditorPage;
use crate::state::board::BoardState;
use crate::state::ui::UiState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(BoardState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text="السبورة الذكية" />
        <EditorPage />
    }
}
