//! Repository Layer - Core Traits
//!
//! Abstract interfaces for the backing store. Implementations write to
//! a browser storage slot or to a remote HTTP collection.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Futures are not `Send`: everything runs on the browser's main thread.
#[async_trait(?Send)]
pub trait Repository<T: Entity> {
    /// Create a new entity. The id of `entity` is ignored; the store assigns one.
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// List all entities in stored order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// A single named storage slot holding one serialized blob
pub trait Slot {
    /// Current contents, `None` when the slot was never written
    fn read(&self) -> DomainResult<Option<String>>;

    /// Replace the contents atomically
    fn write(&self, value: &str) -> DomainResult<()>;
}
