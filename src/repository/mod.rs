//! Repository Layer
//!
//! Backing stores for the contact list.

mod traits;
mod slot;
mod records;
mod local_repo;
mod remote_repo;
mod backend;


pub use traits::{Repository, Slot};
pub use slot::{LocalStorageSlot, MemorySlot};
pub use local_repo::{IdAllocation, LocalContactRepository};
pub use remote_repo::RemoteContactRepository;
pub use backend::ContactBackend;
