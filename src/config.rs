//! Application Configuration
//!
//! Defaults come from the build environment (`PHONEBOOK_BACKEND`,
//! `PHONEBOOK_API_URL`). The page may override any field with a JSON object in
//! `<script id="phonebook-config" type="application/json">`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::repository::IdAllocation;

/// Element holding the runtime override
pub const CONFIG_ELEMENT_ID: &str = "phonebook-config";

pub const DEFAULT_STORAGE_KEY: &str = "phonebook";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Which backing store holds the contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Browser local storage slot
    Local,
    /// REST collection at `api_base_url`
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendKind,
    /// Local storage key for the contact list
    pub storage_key: String,
    pub api_base_url: String,
    pub id_allocation: IdAllocation,
    /// Ask before deleting a contact
    pub confirm_deletes: bool,
    /// Write the sample contacts into an empty local slot
    pub seed_sample_data: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let backend = match option_env!("PHONEBOOK_BACKEND") {
            Some("remote") => BackendKind::Remote,
            _ => BackendKind::Local,
        };
        Self {
            backend,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            api_base_url: option_env!("PHONEBOOK_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            id_allocation: IdAllocation::default(),
            confirm_deletes: true,
            seed_sample_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse an override object; missing fields keep their defaults
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DomainError::Config(e.to_string()))?;
        if config.storage_key.is_empty() {
            return Err(DomainError::Config("storage_key must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Load the page override, or defaults when the page has none
    pub fn load() -> DomainResult<Self> {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
