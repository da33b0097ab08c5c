//! Phonebook Page
//!
//! Loads the contact list on mount and hosts the grid and dialogs.

use leptos::prelude::*;

use crate::components::{ContactDialog, ContactGrid, DeleteConfirmDialog};
use crate::context::use_phonebook;

#[component]
pub fn PhonebookPage() -> impl IntoView {
    let ctx = use_phonebook();

    // Load contacts on mount
    Effect::new(move |_| {
        log::debug!("phonebook mounted, loading contacts");
        ctx.load();
    });

    view! {
        <section class="phonebook-page">
            <ContactGrid />
            <p class="contact-count">
                {move || format!("{} contacts", ctx.state.with(|s| s.contacts().len()))}
            </p>
            <ContactDialog />
            <DeleteConfirmDialog />
        </section>
    }
}
