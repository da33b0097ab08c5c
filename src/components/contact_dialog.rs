//! Contact Dialog Component
//!
//! Modal form for creating and updating a contact.

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::prelude::*;

use crate::context::use_phonebook;
use crate::domain::Field;

#[component]
pub fn ContactDialog() -> impl IntoView {
    let ctx = use_phonebook();

    let is_open = move || ctx.state.with(|s| s.is_dialog_open());
    let title = move || ctx.state.with(|s| s.dialog_title());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.cancel_edit();
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| ctx.cancel_edit()>
                <div
                    class="modal"
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2 class="modal-title">{title}</h2>
                    <form class="contact-form" on:submit=on_submit>
                        {Field::ALL.into_iter().map(|field| view! { <FormField field=field /> }).collect_view()}
                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Labelled input bound to one pending field
#[component]
fn FormField(field: Field) -> impl IntoView {
    let ctx = use_phonebook();

    let error = move || ctx.state.with(|s| s.errors().get(field));
    let field_class = move || if error().is_some() { "form-field has-error" } else { "form-field" };

    view! {
        <label class=field_class>
            <span class="form-label">{field.label()}</span>
            <input
                type="text"
                id=field.key()
                name=field.key()
                prop:value=move || ctx.state.with(|s| s.form().get(field).to_string())
                on:input=move |ev| ctx.set_field(field, event_target_value(&ev))
            />
            <span class="form-error">{error}</span>
        </label>
    }
}
