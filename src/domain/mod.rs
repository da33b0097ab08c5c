//! Domain Layer
//!
//! Contact entity, field validation and the shared error type.
//! No browser dependencies live here.

mod entity;
mod contact;
mod validation;

pub use entity::{Entity, DomainError, DomainResult};
pub use contact::{Contact, ContactFields, ContactId, Field};
pub use validation::{ensure_valid, is_valid_contact, validate_fields, FieldErrors, REQUIRED};
