use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::{Contract, Notifiable, Notifications};

// ============================================================================
// Billing Value Objects
// ============================================================================
//
// Every value object runs its rules once, at construction, through a pure
// `validate` function and keeps the result. Construction never fails; check
// `is_valid()` (or aggregate the notifications) before using the value.
//
// ============================================================================

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 40;
pub const CPF_LEN: usize = 11;
pub const CNPJ_LEN: usize = 14;

/// Person name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl Name {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let notifications = Self::validate(&first_name, &last_name);

        Self {
            first_name,
            last_name,
            notifications,
        }
    }

    pub fn validate(first_name: &str, last_name: &str) -> Notifications {
        Contract::requires()
            .has_min_len(first_name, NAME_MIN_LEN, "Name.FirstName", "First name must have at least 3 characters")
            .has_max_len(first_name, NAME_MAX_LEN, "Name.FirstName", "First name must have at most 40 characters")
            .has_min_len(last_name, NAME_MIN_LEN, "Name.LastName", "Last name must have at least 3 characters")
            .has_max_len(last_name, NAME_MAX_LEN, "Name.LastName", "Last name must have at most 40 characters")
            .into_notifications()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl Notifiable for Name {
    fn notifications(&self) -> Notifications {
        self.notifications.clone()
    }
}

/// Brazilian taxpayer document kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Individual taxpayer (11 digits)
    Cpf,
    /// Company taxpayer (14 digits)
    Cnpj,
}

impl DocumentType {
    pub fn expected_len(self) -> usize {
        match self {
            DocumentType::Cpf => CPF_LEN,
            DocumentType::Cnpj => CNPJ_LEN,
        }
    }
}

/// Taxpayer document (CPF or CNPJ)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub number: String,
    pub document_type: DocumentType,
    #[serde(skip)]
    notifications: Notifications,
}

impl Document {
    pub fn new(number: impl Into<String>, document_type: DocumentType) -> Self {
        let number = number.into();
        let notifications = Self::validate(&number, document_type);

        Self {
            number,
            document_type,
            notifications,
        }
    }

    /// Only the length is checked; check digits are not verified
    pub fn validate(number: &str, document_type: DocumentType) -> Notifications {
        Contract::requires()
            .has_len(number, document_type.expected_len(), "Document.Number", "Invalid document")
            .into_notifications()
    }

    pub fn as_str(&self) -> &str {
        &self.number
    }
}

impl Notifiable for Document {
    fn notifications(&self) -> Notifications {
        self.notifications.clone()
    }
}

/// E-mail address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Email {
    pub address: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl Email {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let notifications = Self::validate(&address);

        Self {
            address,
            notifications,
        }
    }

    pub fn validate(address: &str) -> Notifications {
        Contract::requires()
            .is_email(address, "Email.Address", "Invalid e-mail")
            .into_notifications()
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl Notifiable for Email {
    fn notifications(&self) -> Notifications {
        self.notifications.clone()
    }
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    #[serde(skip)]
    notifications: Notifications,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        let mut address = Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            zip_code: zip_code.into(),
            notifications: Notifications::new(),
        };
        address.notifications = Self::validate(&address);
        address
    }

    pub fn validate(address: &Address) -> Notifications {
        Contract::requires()
            .is_not_empty(&address.street, "Address.Street", "Street is required")
            .has_min_len(address.street.trim(), 3, "Address.Street", "Street must have at least 3 characters")
            .is_not_empty(&address.number, "Address.Number", "Number is required")
            .is_not_empty(&address.neighborhood, "Address.Neighborhood", "Neighborhood is required")
            .is_not_empty(&address.city, "Address.City", "City is required")
            .is_not_empty(&address.state, "Address.State", "State is required")
            .is_not_empty(&address.country, "Address.Country", "Country is required")
            .is_not_empty(&address.zip_code, "Address.ZipCode", "Zip code is required")
            .into_notifications()
    }
}

impl Notifiable for Address {
    fn notifications(&self) -> Notifications {
        self.notifications.clone()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_address() -> Address {
        Address::new("Rua 1", "99", "Vila Xavier", "Araraquara", "SP", "BR", "14800000")
    }

    #[test]
    fn test_valid_name() {
        let name = Name::new("Bruce", "Wayne");
        assert!(name.is_valid());
        assert_eq!(name.to_string(), "Bruce Wayne");
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(Name::new("Ana", "Lee").is_valid());
        assert!(Name::new("Ana", "Leão").is_valid());
        assert!(Name::new("Bo", "Wayne").is_invalid());
        assert!(Name::new("B".repeat(40), "C".repeat(40)).is_valid());
        assert!(Name::new("B".repeat(41), "Wayne").is_invalid());
        assert!(Name::new("Bruce", "W".repeat(41)).is_invalid());
    }

    #[test]
    fn test_name_reports_each_field() {
        let name = Name::new("", "");
        let notifications = name.notifications();

        assert_eq!(notifications.len(), 2);
        assert!(notifications.contains_key("Name.FirstName"));
        assert!(notifications.contains_key("Name.LastName"));
    }

    #[test]
    fn test_cpf_requires_eleven_characters() {
        assert!(Document::new("53020223385", DocumentType::Cpf).is_valid());
        assert!(Document::new("5302022338", DocumentType::Cpf).is_invalid());
        assert!(Document::new("530202233851", DocumentType::Cpf).is_invalid());
    }

    #[test]
    fn test_cnpj_requires_fourteen_characters() {
        assert!(Document::new("12345678000199", DocumentType::Cnpj).is_valid());
        assert!(Document::new("53020223385", DocumentType::Cnpj).is_invalid());
    }

    #[test]
    fn test_invalid_document_notification() {
        let document = Document::new("123", DocumentType::Cpf);
        let notifications = document.notifications();

        assert_eq!(notifications.len(), 1);
        let notification = notifications.iter().next().unwrap();
        assert_eq!(notification.key, "Document.Number");
        assert_eq!(notification.message, "Invalid document");
    }

    #[test]
    fn test_document_type_serialization() {
        let json = serde_json::to_string(&DocumentType::Cnpj).unwrap();
        assert_eq!(json, "\"CNPJ\"");

        let parsed: DocumentType = serde_json::from_str("\"CPF\"").unwrap();
        assert_eq!(parsed, DocumentType::Cpf);
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::new("batman@dc.com").is_valid());
        assert!(Email::new("batman").is_invalid());
        assert!(Email::new("").is_invalid());
    }

    #[test]
    fn test_valid_address() {
        assert!(create_test_address().is_valid());
    }

    #[test]
    fn test_address_requires_every_field() {
        let address = Address::new("", "", "", "", "", "", "");
        let notifications = address.notifications();

        for key in [
            "Address.Street",
            "Address.Number",
            "Address.Neighborhood",
            "Address.City",
            "Address.State",
            "Address.Country",
            "Address.ZipCode",
        ] {
            assert!(notifications.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_address_short_street() {
        let address = Address::new("R1", "99", "Centro", "Araraquara", "SP", "BR", "14800000");
        let notifications = address.notifications();

        assert_eq!(notifications.len(), 1);
        assert!(notifications.contains_key("Address.Street"));
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Name::new("Bruce", "Wayne"), Name::new("Bruce", "Wayne"));
        assert_ne!(
            Document::new("53020223385", DocumentType::Cpf),
            Document::new("53020223386", DocumentType::Cpf)
        );
    }
}
