use leptos::prelude::*;

use crate::app::Page;

/// Stand-in for pages without content
#[component]
pub fn PlaceholderPage(page: Page) -> impl IntoView {
    view! {
        <section class="placeholder-page">
            <h2>{page.label()}</h2>
            <p>"Nothing here yet."</p>
        </section>
    }
}
