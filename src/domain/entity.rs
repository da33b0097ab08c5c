//! Domain Layer - Core Entity Trait
//!
//! Basic contract for domain entities plus the shared error type.

use thiserror::Error;

use super::validation::FieldErrors;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// One or more required fields are empty
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// The backing store could not be read
    #[error("failed to read contacts: {0}")]
    StoreRead(String),
    /// The backing store rejected a write
    #[error("failed to write contacts: {0}")]
    StoreWrite(String),
    #[error("contact {0} not found")]
    NotFound(u32),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DomainError {
    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DomainError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
