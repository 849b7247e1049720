//! Static page footer.

use leptos::prelude::*;

#[component]
pub fn AppFooter() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p>"صُنعت لخدمة المعلمين، كل المعالجة تتم داخل المتصفح"</p>
        </footer>
    }
}
