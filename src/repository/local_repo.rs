//! Local Contact Repository
//!
//! Keeps the whole contact list as one JSON array in a storage slot.
//! Every mutation reads the array, changes it and rewrites it in full.
//! Records that fail to decode are skipped on read and therefore dropped by
//! the next rewrite.

use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::records::parse_contacts;
use super::traits::{Repository, Slot};
use crate::domain::{Contact, ContactId, DomainError, DomainResult, Entity};

/// How new local ids are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdAllocation {
    /// Largest stored id plus one; never reuses an id that is present
    #[default]
    NextAfterMax,
    /// Stored count plus one. Collides with an existing id after deletions.
    LengthPlusOne,
}

impl IdAllocation {
    pub fn next_id(self, contacts: &[Contact]) -> Option<ContactId> {
        match self {
            IdAllocation::NextAfterMax => contacts
                .iter()
                .map(|c| c.id)
                .max()
                .unwrap_or(0)
                .checked_add(1),
            IdAllocation::LengthPlusOne => u32::try_from(contacts.len())
                .ok()
                .and_then(|len| len.checked_add(1)),
        }
    }
}

/// Contacts stored in a single slot
#[derive(Clone)]
pub struct LocalContactRepository {
    slot: Rc<dyn Slot>,
    allocation: IdAllocation,
}

impl LocalContactRepository {
    pub fn new(slot: Rc<dyn Slot>, allocation: IdAllocation) -> Self {
        Self { slot, allocation }
    }

    /// Write `samples` when the slot holds no contacts yet.
    /// Returns whether anything was written.
    pub fn seed_if_empty(&self, samples: &[Contact]) -> DomainResult<bool> {
        if !self.read_for_write()?.is_empty() {
            return Ok(false);
        }
        self.write_all(samples)?;
        Ok(true)
    }

    fn read_all(&self) -> DomainResult<Vec<Contact>> {
        match self.slot.read()? {
            Some(blob) if !blob.trim().is_empty() => parse_contacts(&blob),
            _ => Ok(Vec::new()),
        }
    }

    /// Read ahead of a rewrite. An unreadable slot fails the write.
    fn read_for_write(&self) -> DomainResult<Vec<Contact>> {
        self.read_all().map_err(|e| match e {
            DomainError::StoreRead(message) => DomainError::StoreWrite(message),
            other => other,
        })
    }

    fn write_all(&self, contacts: &[Contact]) -> DomainResult<()> {
        let blob = serde_json::to_string(contacts)
            .map_err(|e| DomainError::StoreWrite(e.to_string()))?;
        self.slot.write(&blob)
    }
}

#[async_trait(?Send)]
impl Repository<Contact> for LocalContactRepository {
    async fn create(&self, entity: &Contact) -> DomainResult<Contact> {
        let mut contacts = self.read_for_write()?;
        let id = self
            .allocation
            .next_id(&contacts)
            .ok_or_else(|| DomainError::StoreWrite("contact ids exhausted".to_string()))?;

        let mut contact = entity.clone();
        contact.id = id;
        contacts.push(contact.clone());
        self.write_all(&contacts)?;
        log::debug!("stored contact {} ({} total)", id, contacts.len());
        Ok(contact)
    }

    async fn list(&self) -> DomainResult<Vec<Contact>> {
        self.read_all()
    }

    async fn update(&self, entity: &Contact) -> DomainResult<Contact> {
        let mut contacts = self.read_for_write()?;
        let mut found = false;
        for contact in contacts.iter_mut().filter(|c| c.id() == entity.id()) {
            *contact = entity.clone();
            found = true;
        }
        if !found {
            return Err(DomainError::NotFound(entity.id));
        }
        self.write_all(&contacts)?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let mut contacts = self.read_for_write()?;
        let before = contacts.len();
        contacts.retain(|c| c.id() != id);
        if contacts.len() == before {
            return Err(DomainError::NotFound(id));
        }
        self.write_all(&contacts)
    }
}
