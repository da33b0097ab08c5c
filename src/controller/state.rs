//! Contact List State
//!
//! The synchronous half of the controller: the list, the dialog, the pending
//! form and the pending delete. Store calls happen elsewhere; every operation
//! that writes returns a `Pending`, and the caller executes it against the
//! repository and hands the `Settled` result back to `settle`.

use crate::domain::{
    validate_fields, ensure_valid, is_valid_contact, Contact, ContactFields, ContactId,
    DomainError, DomainResult, Field, FieldErrors,
};

use super::mutation::{Applied, Mutation, Origin, Pending, Settled};

/// What the contact dialog is doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogMode {
    #[default]
    Closed,
    Create,
    Edit(ContactId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactState {
    /// Display order is insertion order
    contacts: Vec<Contact>,
    dialog: DialogMode,
    form: ContactFields,
    errors: FieldErrors,
    pending_delete: Option<ContactId>,
    /// Delete asks for confirmation first
    confirm_deletes: bool,
    loaded: bool,
}

impl ContactState {
    pub fn new(confirm_deletes: bool) -> Self {
        Self {
            contacts: Vec::new(),
            dialog: DialogMode::Closed,
            form: ContactFields::default(),
            errors: FieldErrors::default(),
            pending_delete: None,
            confirm_deletes,
            loaded: false,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn dialog(&self) -> DialogMode {
        self.dialog
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog != DialogMode::Closed
    }

    pub fn dialog_title(&self) -> &'static str {
        match self.dialog {
            DialogMode::Edit(_) => "Update Contact",
            _ => "New Contact",
        }
    }

    pub fn form(&self) -> &ContactFields {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn pending_delete(&self) -> Option<ContactId> {
        self.pending_delete
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Take the result of a backing-store read.
    /// A failed read keeps the current list.
    pub fn finish_load(&mut self, result: DomainResult<Vec<Contact>>) {
        match result {
            Ok(contacts) => {
                let total = contacts.len();
                self.contacts = contacts.into_iter().filter(is_valid_contact).collect();
                if self.contacts.len() < total {
                    log::warn!(
                        "skipped {} stored contacts with empty fields",
                        total - self.contacts.len()
                    );
                }
                log::info!("loaded {} contacts", self.contacts.len());
            }
            Err(e) => log::error!("error fetching contacts: {}", e),
        }
        self.loaded = true;
    }

    pub fn begin_create(&mut self) {
        self.reset_form();
        self.dialog = DialogMode::Create;
    }

    pub fn begin_edit(&mut self, id: ContactId) -> DomainResult<()> {
        let fields = self.contact(id).ok_or(DomainError::NotFound(id))?.fields();
        self.reset_form();
        self.form = fields;
        self.dialog = DialogMode::Edit(id);
        Ok(())
    }

    /// Change one pending field and re-check it
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.errors.revalidate(field, &value);
        self.form.set(field, value);
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
        self.dialog = DialogMode::Closed;
    }

    /// Validate the form and build the write it implies.
    /// On validation failure the errors are recorded and the dialog stays open.
    pub fn submit(&mut self) -> DomainResult<Pending> {
        let errors = validate_fields(&self.form);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(DomainError::Validation(errors));
        }
        self.errors.clear();

        let mutation = match self.dialog {
            DialogMode::Edit(id) => {
                let contact = self.contact(id).ok_or(DomainError::NotFound(id))?;
                Mutation::Update(contact.merged(self.form.clone()))
            }
            DialogMode::Create | DialogMode::Closed => Mutation::Create(self.form.clone()),
        };
        Ok(Pending::new(mutation, Origin::Dialog))
    }

    /// Validate an inline row edit and build its update
    pub fn commit_row(&self, contact: Contact) -> DomainResult<Pending> {
        ensure_valid(&contact.fields())?;
        if self.contact(contact.id).is_none() {
            return Err(DomainError::NotFound(contact.id));
        }
        Ok(Pending::new(Mutation::Update(contact), Origin::Direct))
    }

    /// Delete button. With confirmation on this only marks the contact and
    /// returns nothing to execute.
    pub fn remove(&mut self, id: ContactId) -> Option<Pending> {
        if self.confirm_deletes {
            self.request_remove(id);
            None
        } else {
            Some(Pending::new(Mutation::Delete(id), Origin::Direct))
        }
    }

    pub fn request_remove(&mut self, id: ContactId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_remove(&mut self) {
        self.pending_delete = None;
    }

    /// Clear the pending delete and return the write for it, if any
    pub fn confirm_remove(&mut self) -> Option<Pending> {
        self.pending_delete
            .take()
            .map(|id| Pending::new(Mutation::Delete(id), Origin::Direct))
    }

    /// Fold a store result back in. A confirmed dialog submit also closes the
    /// dialog; a failure leaves the list, the dialog and the entered values.
    pub fn settle(&mut self, settled: Settled) -> DomainResult<()> {
        let applied = settled.result?;
        self.apply(applied);
        if settled.origin == Origin::Dialog {
            self.cancel_edit();
        }
        Ok(())
    }

    fn apply(&mut self, applied: Applied) {
        match applied {
            Applied::Created(contact) => self.contacts.push(contact),
            Applied::Updated(updated) => {
                for contact in self.contacts.iter_mut().filter(|c| c.id == updated.id) {
                    *contact = updated.clone();
                }
            }
            Applied::Deleted(id) => self.contacts.retain(|c| c.id != id),
        }
    }

    fn reset_form(&mut self) {
        self.form = ContactFields::default();
        self.errors.clear();
    }
}
