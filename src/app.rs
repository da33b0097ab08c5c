//! Phonebook App
//!
//! Navigation shell: title bar, slide-out drawer and the current page.

use leptos::prelude::*;

use crate::components::{NavDrawer, PhonebookPage, PlaceholderPage, TitleBar};
use crate::config::AppConfig;
use crate::context::PhonebookContext;
use crate::repository::ContactBackend;

/// Pages reachable from the drawer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Item1,
    Item2,
    Item4,
    Item5,
    Phonebook,
}

impl Page {
    /// Drawer order
    pub const ALL: [Page; 5] = [Page::Item1, Page::Item2, Page::Item4, Page::Item5, Page::Phonebook];

    pub fn label(self) -> &'static str {
        match self {
            Page::Item1 => "Item 1",
            Page::Item2 => "Item 2",
            Page::Item4 => "Item 4",
            Page::Item5 => "Item 5",
            Page::Phonebook => "Phonebook",
        }
    }

    /// Location hash path, e.g. `/phonebook`
    pub fn path(self) -> &'static str {
        match self {
            Page::Item1 => "/item-1",
            Page::Item2 => "/item-2",
            Page::Item4 => "/item-4",
            Page::Item5 => "/item-5",
            Page::Phonebook => "/phonebook",
        }
    }

    /// Parse a location hash (`#/phonebook`); unknown paths give `None`
    pub fn from_hash(hash: &str) -> Option<Page> {
        let path = hash.trim_start_matches('#');
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

fn initial_page() -> Page {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .and_then(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Phonebook)
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let backend = ContactBackend::from_config(&config);
    provide_context(PhonebookContext::new(backend, config.confirm_deletes));

    let (drawer_open, set_drawer_open) = signal(false);
    let (page, set_page) = signal(initial_page());

    // Keep the location hash in step with the page
    Effect::new(move |_| {
        let path = page.get().path();
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(path).is_err() {
                log::warn!("could not update location hash to {}", path);
            }
        }
    });

    view! {
        <div class="app-layout">
            <TitleBar page=page set_drawer_open=set_drawer_open />
            <NavDrawer
                open=drawer_open
                set_open=set_drawer_open
                current_page=page
                set_page=set_page
            />
            <main class="main-content">
                {move || match page.get() {
                    Page::Phonebook => view! { <PhonebookPage /> }.into_any(),
                    other => view! { <PlaceholderPage page=other /> }.into_any(),
                }}
            </main>
        </div>
    }
}
