//! Store Round Trips
//!
//! A `Mutation` is one prepared write. Executing it performs the single
//! backing-store call and yields the `Applied` change for the in-memory list.
//! `Pending` pairs a mutation with the operation that produced it, so the
//! state knows what to close once the result comes back as `Settled`.

use crate::domain::{Contact, ContactFields, ContactId, DomainResult};
use crate::repository::Repository;

/// A write waiting for the backing store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(ContactFields),
    Update(Contact),
    Delete(ContactId),
}

/// A write the backing store confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Created(Contact),
    Updated(Contact),
    Deleted(ContactId),
}

/// Which operation started a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Dialog submit; success closes the dialog
    Dialog,
    /// Delete, confirmed delete or inline row commit
    Direct,
}

impl Mutation {
    /// Run against `repo`. Failures are logged here and returned unchanged.
    pub async fn execute<R>(self, repo: &R) -> DomainResult<Applied>
    where
        R: Repository<Contact> + ?Sized,
    {
        let result = match &self {
            Mutation::Create(fields) => repo
                .create(&Contact::from_fields(0, fields.clone()))
                .await
                .map(Applied::Created),
            Mutation::Update(contact) => repo.update(contact).await.map(Applied::Updated),
            Mutation::Delete(id) => repo.delete(*id).await.map(|_| Applied::Deleted(*id)),
        };
        if let Err(e) = &result {
            log::error!("error {}: {}", self.describe(), e);
        }
        result
    }

    fn describe(&self) -> String {
        match self {
            Mutation::Create(_) => "adding contact".to_string(),
            Mutation::Update(contact) => format!("updating contact {}", contact.id),
            Mutation::Delete(id) => format!("deleting contact {}", id),
        }
    }
}

/// A prepared write and the operation it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub(super) mutation: Mutation,
    pub(super) origin: Origin,
}

impl Pending {
    pub(super) fn new(mutation: Mutation, origin: Origin) -> Self {
        Self { mutation, origin }
    }

    pub fn mutation(&self) -> &Mutation {
        &self.mutation
    }

    /// Perform the store call. Hand the result to `ContactState::settle`.
    pub async fn execute<R>(self, repo: &R) -> Settled
    where
        R: Repository<Contact> + ?Sized,
    {
        Settled {
            origin: self.origin,
            result: self.mutation.execute(repo).await,
        }
    }
}

/// The outcome of a `Pending` write
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub(super) origin: Origin,
    pub(super) result: DomainResult<Applied>,
}
