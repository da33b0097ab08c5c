//! Record Decoding
//!
//! Store payloads are decoded one record at a time, so a single malformed
//! entry does not make the rest of the list unreadable.

use serde_json::Value;

use crate::domain::{Contact, DomainError, DomainResult};

/// Decode a JSON array of contacts, skipping records that do not parse
pub fn decode_contacts(values: Vec<Value>) -> Vec<Contact> {
    let total = values.len();
    let contacts: Vec<Contact> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Contact>(value) {
            Ok(contact) => Some(contact),
            Err(e) => {
                log::warn!("skipping stored contact #{}: {}", index, e);
                None
            }
        })
        .collect();
    if contacts.len() < total {
        log::warn!("{} of {} stored contacts could not be read", total - contacts.len(), total);
    }
    contacts
}

/// Parse a whole payload. Anything other than a JSON array is a read failure.
pub fn parse_contacts(payload: &str) -> DomainResult<Vec<Contact>> {
    let values: Vec<Value> =
        serde_json::from_str(payload).map_err(|e| DomainError::StoreRead(e.to_string()))?;
    Ok(decode_contacts(values))
}
