//! Contact Row Component
//!
//! One grid row. Double-click switches to inline editing; Enter or Save
//! commits, Escape or Cancel discards. Keys do nothing outside edit mode.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::components::column_for;
use crate::context::use_phonebook;
use crate::domain::{Contact, Field};

/// What a key press inside a row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKeyAction {
    Save,
    Discard,
}

/// Enter on a row button bubbles up to the row, so only edit mode reacts
fn row_key_action(key: &str, editing: bool) -> Option<RowKeyAction> {
    if !editing {
        return None;
    }
    match key {
        "Enter" => Some(RowKeyAction::Save),
        "Escape" => Some(RowKeyAction::Discard),
        _ => None,
    }
}

#[component]
pub fn ContactRow(contact: Contact) -> impl IntoView {
    let ctx = use_phonebook();

    let id = contact.id;
    let original = contact.fields();
    let draft = RwSignal::new(contact.fields());
    let (editing, set_editing) = signal(false);
    let (row_error, set_row_error) = signal::<Option<String>>(None);

    let start_edit = {
        let original = original.clone();
        move || {
            draft.set(original.clone());
            set_row_error.set(None);
            set_editing.set(true);
        }
    };

    let save = move || {
        let updated = Contact::from_fields(id, draft.get_untracked());
        match ctx.commit_row(updated) {
            Ok(()) => {
                set_row_error.set(None);
                set_editing.set(false);
            }
            Err(e) => {
                let message = e.field_errors().map_or_else(|| e.to_string(), |errors| errors.to_string());
                set_row_error.set(Some(message));
            }
        }
    };

    let discard = move || {
        set_row_error.set(None);
        set_editing.set(false);
    };

    let on_keydown = move |ev: KeyboardEvent| {
        match row_key_action(&ev.key(), editing.get_untracked()) {
            Some(RowKeyAction::Save) => save(),
            Some(RowKeyAction::Discard) => discard(),
            None => {}
        }
    };

    let row_class = move || if editing.get() { "grid-row editing" } else { "grid-row" };

    view! {
        <tr
            class=row_class
            on:dblclick=move |_| {
                if !editing.get_untracked() {
                    start_edit();
                }
            }
            on:keydown=on_keydown
        >
            {move || {
                if editing.get() {
                    Field::ALL.into_iter().map(|field| {
                        let editable = column_for(field).map_or(false, |column| column.editable);
                        view! {
                            <td data-field=field.key()>
                                <input
                                    type="text"
                                    aria-label=field.label()
                                    disabled=!editable
                                    prop:value=move || draft.with(|d| d.get(field).to_string())
                                    on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                                />
                            </td>
                        }
                    }).collect_view().into_any()
                } else {
                    Field::ALL.into_iter().map(|field| {
                        let value = original.get(field).to_string();
                        view! { <td data-field=field.key()>{value}</td> }
                    }).collect_view().into_any()
                }
            }}
            <td class="grid-actions" data-field="actions">
                {move || {
                    if editing.get() {
                        view! {
                            <button class="save-btn" on:click=move |_| save()>"Save"</button>
                            <button class="cancel-btn" on:click=move |_| discard()>"Cancel"</button>
                        }.into_any()
                    } else {
                        view! {
                            <button class="edit-btn" title="Update" on:click=move |_| ctx.begin_edit(id)>"✎"</button>
                            <button class="delete-btn" title="Delete" on:click=move |_| ctx.remove(id)>"×"</button>
                        }.into_any()
                    }
                }}
                {move || row_error.get().map(|message| view! { <span class="row-error">{message}</span> })}
            </td>
        </tr>
    }
}
