//! Delete Confirm Dialog Component
//!
//! Asks before the pending delete is carried out.

use leptos::prelude::*;

use crate::context::use_phonebook;

/// Confirmation modal, shown while a delete is pending
#[component]
pub fn DeleteConfirmDialog() -> impl IntoView {
    let ctx = use_phonebook();

    let pending_name = move || {
        ctx.state.with(|s| {
            s.pending_delete()
                .and_then(|id| s.contact(id))
                .map(|c| format!("{} {}", c.name, c.surname))
        })
    };

    view! {
        <Show when=move || ctx.state.with(|s| s.pending_delete().is_some())>
            <div class="modal-backdrop" on:click=move |_| ctx.cancel_remove()>
                <div class="modal confirm" role="alertdialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">"Confirm Delete"</h2>
                    <p>"Are you sure you want to delete this contact?"</p>
                    {move || pending_name().map(|name| view! { <p class="delete-confirm-name">{name}</p> })}
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| ctx.cancel_remove()>"Cancel"</button>
                        <button class="confirm-btn primary-btn" on:click=move |_| ctx.confirm_remove()>"OK"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
