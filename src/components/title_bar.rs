//! Title Bar Component
//!
//! App bar with the drawer toggle and the current page heading.

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn TitleBar(
    page: ReadSignal<Page>,
    set_drawer_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="app-bar">
            <button
                class="menu-btn"
                aria-label="left-menu"
                on:click=move |_| set_drawer_open.set(true)
            >
                "☰"
            </button>
            <h1 class="app-bar-title">{move || page.get().label()}</h1>
        </header>
    }
}
