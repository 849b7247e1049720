//! Static page header.

use leptos::prelude::*;

#[component]
pub fn AppHeader() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-header__title">"السبورة الذكية"</h1>
            <p class="app-header__subtitle">"اكتب، نسّق، وصدّر دروسك بدقة عالية"</p>
        </header>
    }
}
