//! Field Validation
//!
//! Presence checks for contact fields. Every field is required; there is no
//! format validation beyond that.

use std::collections::BTreeMap;

use super::contact::{Contact, ContactFields, Field};
use super::entity::{DomainError, DomainResult};

/// Message shown next to an empty field
pub const REQUIRED: &str = "Required";

/// Per-field error messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Replace the error state of a single field with a fresh check of `value`
    pub fn revalidate(&mut self, field: Field, value: &str) {
        match check_field(value) {
            Some(message) => self.0.insert(field, message),
            None => self.0.remove(&field),
        };
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{} {}", field, message.to_lowercase()))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Presence check for one value
pub fn check_field(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(REQUIRED)
    } else {
        None
    }
}

/// Check every field; returns all errors found
pub fn validate_fields(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.revalidate(field, fields.get(field));
    }
    errors
}

/// Reject the fields if any required value is missing
pub fn ensure_valid(fields: &ContactFields) -> DomainResult<()> {
    let errors = validate_fields(fields);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

/// Whether a record read from the store has the required shape
pub fn is_valid_contact(contact: &Contact) -> bool {
    validate_fields(&contact.fields()).is_empty()
}
