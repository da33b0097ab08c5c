//! Storage Slots
//!
//! `LocalStorageSlot` wraps one `window.localStorage` key.
//! `MemorySlot` keeps the blob in memory; it backs tests and is the
//! fallback when the browser refuses access to local storage.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use super::traits::Slot;
use crate::domain::{DomainError, DomainResult};

/// In-memory slot. Clones share the same contents.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> DomainResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> DomainResult<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// One key of `window.localStorage`
#[derive(Clone, Debug)]
pub struct LocalStorageSlot {
    storage: web_sys::Storage,
    key: String,
}

impl LocalStorageSlot {
    /// Open the slot named `key`
    pub fn open(key: &str) -> DomainResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::StoreRead("no window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| DomainError::StoreRead(js_error(&e)))?
            .ok_or_else(|| DomainError::StoreRead("local storage is disabled".to_string()))?;
        Ok(Self {
            storage,
            key: key.to_string(),
        })
    }
}

impl Slot for LocalStorageSlot {
    fn read(&self) -> DomainResult<Option<String>> {
        self.storage
            .get_item(&self.key)
            .map_err(|e| DomainError::StoreRead(js_error(&e)))
    }

    fn write(&self, value: &str) -> DomainResult<()> {
        self.storage
            .set_item(&self.key, value)
            .map_err(|e| DomainError::StoreWrite(js_error(&e)))
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
