//! Navigation Drawer Component
//!
//! Slide-out page list. Picking a page or clicking the backdrop closes it.

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn NavDrawer(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    current_page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| set_open.set(false)></div>
            <nav class="drawer" role="presentation">
                <ul class="drawer-list">
                    {Page::ALL.into_iter().map(|page| {
                        let item_class = move || {
                            if current_page.get() == page { "drawer-item active" } else { "drawer-item" }
                        };
                        view! {
                            <li>
                                <button
                                    class=item_class
                                    on:click=move |_| {
                                        set_page.set(page);
                                        set_open.set(false);
                                    }
                                >
                                    {page.label()}
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </Show>
    }
}
