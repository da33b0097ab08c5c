//! Phonebook Context
//!
//! Shared contact state and backing store, provided via Leptos Context API.
//! Components call these methods. `ContactState` decides what to write; the
//! resulting `Pending` runs in `spawn_local` and settles into the state signal
//! when it resolves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::{ContactState, Pending};
use crate::domain::{Contact, ContactId, DomainResult, Field};
use crate::repository::{ContactBackend, Repository};

#[derive(Clone, Copy)]
pub struct PhonebookContext {
    /// Contact list, dialog and pending delete
    pub state: RwSignal<ContactState>,
    backend: StoredValue<ContactBackend, LocalStorage>,
}

impl PhonebookContext {
    pub fn new(backend: ContactBackend, confirm_deletes: bool) -> Self {
        Self {
            state: RwSignal::new(ContactState::new(confirm_deletes)),
            backend: StoredValue::new_local(backend),
        }
    }

    /// Reload the list from the backing store
    pub fn load(&self) {
        let backend = self.backend.get_value();
        let state = self.state;
        spawn_local(async move {
            let result = backend.list().await;
            state.update(|s| s.finish_load(result));
        });
    }

    pub fn begin_create(&self) {
        self.state.update(|s| s.begin_create());
    }

    pub fn begin_edit(&self, id: ContactId) {
        self.state.update(|s| {
            if let Err(e) = s.begin_edit(id) {
                log::warn!("cannot edit: {}", e);
            }
        });
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    /// Submit the dialog form. Validation errors stay in the state.
    pub fn submit(&self) {
        if let Some(Ok(pending)) = self.state.try_update(|s| s.submit()) {
            self.run(pending);
        }
    }

    pub fn cancel_edit(&self) {
        self.state.update(|s| s.cancel_edit());
    }

    /// Delete button
    pub fn remove(&self, id: ContactId) {
        if let Some(Some(pending)) = self.state.try_update(|s| s.remove(id)) {
            self.run(pending);
        }
    }

    pub fn confirm_remove(&self) {
        if let Some(Some(pending)) = self.state.try_update(|s| s.confirm_remove()) {
            self.run(pending);
        }
    }

    pub fn cancel_remove(&self) {
        self.state.update(|s| s.cancel_remove());
    }

    /// Inline row edit. Validation fails synchronously; the write is async.
    pub fn commit_row(&self, contact: Contact) -> DomainResult<()> {
        let pending = self.state.with_untracked(|s| s.commit_row(contact))?;
        self.run(pending);
        Ok(())
    }

    fn run(&self, pending: Pending) {
        let backend = self.backend.get_value();
        let state = self.state;
        log::debug!("running {:?}", pending.mutation());
        spawn_local(async move {
            let settled = pending.execute(&backend).await;
            state.update(|s| {
                if let Err(e) = s.settle(settled) {
                    log::debug!("write not applied: {}", e);
                }
            });
        });
    }
}

/// Get the phonebook context
pub fn use_phonebook() -> PhonebookContext {
    expect_context::<PhonebookContext>()
}
