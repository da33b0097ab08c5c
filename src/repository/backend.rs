//! Backend Selection
//!
//! Picks the local or remote repository from configuration.

use std::rc::Rc;

use async_trait::async_trait;

use super::{
    LocalContactRepository, LocalStorageSlot, MemorySlot, RemoteContactRepository, Repository,
    Slot,
};
use crate::config::{AppConfig, BackendKind};
use crate::domain::{Contact, ContactId, DomainResult};

/// Contacts written to an empty local slot on first start
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1, "Burak", "Akın", "0531*****75"),
        Contact::new(2, "Fatih", "Batuk", "123456789"),
    ]
}

/// The backing store chosen at startup
#[derive(Clone)]
pub enum ContactBackend {
    Local(LocalContactRepository),
    Remote(RemoteContactRepository),
}

impl ContactBackend {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.backend {
            BackendKind::Remote => {
                log::info!("using remote contacts at {}", config.api_base_url);
                Self::Remote(RemoteContactRepository::new(&config.api_base_url))
            }
            BackendKind::Local => {
                let slot: Rc<dyn Slot> = match LocalStorageSlot::open(&config.storage_key) {
                    Ok(slot) => Rc::new(slot),
                    Err(e) => {
                        log::warn!("{}; contacts will be kept in memory only", e);
                        Rc::new(MemorySlot::new())
                    }
                };
                Self::local(slot, config)
            }
        }
    }

    /// Local backend over an explicit slot, seeded when configured
    pub fn local(slot: Rc<dyn Slot>, config: &AppConfig) -> Self {
        let repo = LocalContactRepository::new(slot, config.id_allocation);
        if config.seed_sample_data {
            match repo.seed_if_empty(&sample_contacts()) {
                Ok(true) => log::info!("seeded '{}' with sample contacts", config.storage_key),
                Ok(false) => {}
                Err(e) => log::warn!("could not seed sample contacts: {}", e),
            }
        }
        Self::Local(repo)
    }
}

#[async_trait(?Send)]
impl Repository<Contact> for ContactBackend {
    async fn create(&self, entity: &Contact) -> DomainResult<Contact> {
        match self {
            Self::Local(repo) => repo.create(entity).await,
            Self::Remote(repo) => repo.create(entity).await,
        }
    }

    async fn list(&self) -> DomainResult<Vec<Contact>> {
        match self {
            Self::Local(repo) => repo.list().await,
            Self::Remote(repo) => repo.list().await,
        }
    }

    async fn update(&self, entity: &Contact) -> DomainResult<Contact> {
        match self {
            Self::Local(repo) => repo.update(entity).await,
            Self::Remote(repo) => repo.update(entity).await,
        }
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        match self {
            Self::Local(repo) => repo.delete(id).await,
            Self::Remote(repo) => repo.delete(id).await,
        }
    }
}
