//! Contact Grid Component
//!
//! Table of contacts with a toolbar. Rows are rendered by `ContactRow`.

use leptos::prelude::*;

use crate::components::ContactRow;
use crate::context::use_phonebook;
use crate::domain::Field;

/// One grid column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    /// Editable inline
    pub editable: bool,
}

/// Grid columns in display order
pub static COLUMNS: [Column; 4] = [
    Column { key: "name", header: "Name", editable: true },
    Column { key: "surname", header: "Surname", editable: true },
    Column { key: "phoneNumber", header: "Phone Number", editable: true },
    Column { key: "actions", header: "Actions", editable: false },
];

/// Column for a contact field
pub fn column_for(field: Field) -> Option<&'static Column> {
    COLUMNS.iter().find(|column| column.key == field.key())
}

#[component]
pub fn ContactGrid() -> impl IntoView {
    let ctx = use_phonebook();

    let contacts = Memo::new(move |_| ctx.state.with(|s| s.contacts().to_vec()));
    let loaded = Memo::new(move |_| ctx.state.with(|s| s.is_loaded()));

    view! {
        <div class="contact-grid">
            <div class="grid-toolbar">
                <button class="new-btn" on:click=move |_| ctx.begin_create()>
                    "+ New"
                </button>
            </div>

            <table class="grid-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|column| view! {
                            <th data-field=column.key>{column.header}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    // Index is part of the key: ids are not guaranteed unique
                    <For
                        each=move || contacts.get().into_iter().enumerate()
                        key=|(index, contact)| (*index, contact.clone())
                        children=move |(_, contact)| view! { <ContactRow contact=contact /> }
                    />
                </tbody>
            </table>

            {move || {
                if !loaded.get() {
                    Some(view! { <p class="grid-status">"Loading..."</p> }.into_any())
                } else if contacts.with(|c| c.is_empty()) {
                    Some(view! { <p class="grid-status">"No contacts"</p> }.into_any())
                } else {
                    None
                }
            }}
        </div>
    }
}
