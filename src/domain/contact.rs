//! Contact Entity
//!
//! A single phonebook entry and its editable fields.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Contact identifier
pub type ContactId = u32;

/// A phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

impl Contact {
    pub fn new(id: ContactId, name: &str, surname: &str, phone_number: &str) -> Self {
        Self::from_fields(id, ContactFields::new(name, surname, phone_number))
    }

    /// Build a contact from form fields under the given id
    pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            surname: fields.surname,
            phone_number: fields.phone_number,
        }
    }

    /// Editable part of this contact
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    /// Copy of this contact with `fields` merged in; the id is kept
    pub fn merged(&self, fields: ContactFields) -> Self {
        Self::from_fields(self.id, fields)
    }
}

impl Entity for Contact {
    type Id = ContactId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Editable contact fields (form state and POST body)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

impl ContactFields {
    pub fn new(name: &str, surname: &str, phone_number: &str) -> Self {
        Self {
            name: name.to_string(),
            surname: surname.to_string(),
            phone_number: phone_number.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Surname => self.surname = value,
            Field::PhoneNumber => self.phone_number = value,
        }
    }
}

/// One editable column of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Surname,
    PhoneNumber,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Name, Field::Surname, Field::PhoneNumber];

    /// JSON / form key
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::PhoneNumber => "phoneNumber",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::PhoneNumber => "Phone Number",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_json_uses_camel_case() {
        let contact = Contact::new(1, "Burak", "Akın", "0531*****75");
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Burak","surname":"Akın","phoneNumber":"0531*****75"}"#
        );
    }

    #[test]
    fn test_contact_ignores_unknown_fields() {
        let json = r#"{"id":7,"name":"Ann","surname":"Lee","phoneNumber":"555","isNew":false}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact, Contact::new(7, "Ann", "Lee", "555"));
    }

    #[test]
    fn test_merged_keeps_id() {
        let contact = Contact::new(3, "Ann", "Lee", "555");
        let merged = contact.merged(ContactFields::new("Annie", "Lee", "556"));
        assert_eq!(merged.id(), 3);
        assert_eq!(merged.name, "Annie");
        assert_eq!(merged.phone_number, "556");
    }

    #[test]
    fn test_fields_get_and_set() {
        let mut fields = ContactFields::default();
        fields.set(Field::PhoneNumber, "123".to_string());
        assert_eq!(fields.get(Field::PhoneNumber), "123");
        assert_eq!(fields.get(Field::Name), "");
    }

    #[test]
    fn test_fields_post_body_has_no_id() {
        let body = serde_json::to_value(ContactFields::new("Ann", "Lee", "555")).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["phoneNumber"], "555");
    }
}
