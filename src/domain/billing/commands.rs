use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::{Contract, Notifications};
use super::payment::PaymentMethod;
use super::value_objects::{DocumentType, NAME_MAX_LEN, NAME_MIN_LEN};

// ============================================================================
// Billing Domain Commands
// ============================================================================

/// Student, payer and address fields shared by every payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDetails {
    pub first_name: String,
    pub last_name: String,
    pub document: String,
    pub email: String,

    pub paid_date: DateTime<Utc>,
    pub expire_date: DateTime<Utc>,
    pub total: Decimal,
    pub total_paid: Decimal,
    pub payer: String,
    pub payer_document: String,
    pub payer_document_type: DocumentType,
    pub payer_email: String,

    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// Register a student with a new subscription paid through `method`.
///
/// Deserializes from one flat JSON object; the payment method is selected
/// by its `type` field (`boleto`, `payPal`, `creditCard`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionCommand {
    #[serde(flatten)]
    pub details: SubscriptionDetails,
    #[serde(flatten)]
    pub method: PaymentMethod,
}

impl CreateSubscriptionCommand {
    pub fn boleto(details: SubscriptionDetails, bar_code: impl Into<String>, boleto_number: impl Into<String>) -> Self {
        Self {
            details,
            method: PaymentMethod::Boleto {
                bar_code: bar_code.into(),
                boleto_number: boleto_number.into(),
            },
        }
    }

    pub fn paypal(details: SubscriptionDetails, transaction_code: impl Into<String>) -> Self {
        Self {
            details,
            method: PaymentMethod::PayPal {
                transaction_code: transaction_code.into(),
            },
        }
    }

    pub fn credit_card(
        details: SubscriptionDetails,
        card_holder_name: impl Into<String>,
        card_number: impl Into<String>,
        last_transaction_number: impl Into<String>,
    ) -> Self {
        Self {
            details,
            method: PaymentMethod::CreditCard {
                card_holder_name: card_holder_name.into(),
                card_number: card_number.into(),
                last_transaction_number: last_transaction_number.into(),
            },
        }
    }

    /// Cheap checks run before any repository lookup
    pub fn validate(&self) -> Notifications {
        let d = &self.details;

        Contract::requires()
            .has_min_len(&d.first_name, NAME_MIN_LEN, "Name.FirstName", "First name must have at least 3 characters")
            .has_max_len(&d.first_name, NAME_MAX_LEN, "Name.FirstName", "First name must have at most 40 characters")
            .has_min_len(&d.last_name, NAME_MIN_LEN, "Name.LastName", "Last name must have at least 3 characters")
            .has_max_len(&d.last_name, NAME_MAX_LEN, "Name.LastName", "Last name must have at most 40 characters")
            .is_not_empty(&d.document, "Document", "Document is required")
            .is_not_empty(&d.email, "Email", "E-mail is required")
            .into_notifications()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "type": "boleto",
            "barCode": "123456789",
            "boletoNumber": "987654321",
            "firstName": "Bruce",
            "lastName": "Wayne",
            "document": "53020223385",
            "email": "batman@dc.com",
            "paidDate": "2026-10-16T12:00:00Z",
            "expireDate": "2026-11-16T12:00:00Z",
            "total": "60.00",
            "totalPaid": 60,
            "payer": "WAYNE CORP",
            "payerDocument": "12345678911",
            "payerDocumentType": "CPF",
            "payerEmail": "batman@dc.com",
            "street": "Rua 1",
            "number": "99",
            "neighborhood": "Vila Xavier",
            "city": "Araraquara",
            "state": "SP",
            "country": "BR",
            "zipCode": "14800000"
        })
    }

    #[test]
    fn test_command_deserializes_from_flat_json() {
        let command: CreateSubscriptionCommand = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(command.details.first_name, "Bruce");
        assert_eq!(command.details.total, Decimal::new(6000, 2));
        assert_eq!(command.details.total_paid, Decimal::new(60, 0));
        assert_eq!(command.details.payer_document_type, DocumentType::Cpf);
        assert!(matches!(command.method, PaymentMethod::Boleto { ref bar_code, .. } if bar_code == "123456789"));
    }

    #[test]
    fn test_valid_command_has_no_notifications() {
        let command: CreateSubscriptionCommand = serde_json::from_value(sample_json()).unwrap();
        assert!(command.validate().is_empty());
    }

    #[test]
    fn test_short_names_fail_fast() {
        let mut command: CreateSubscriptionCommand = serde_json::from_value(sample_json()).unwrap();
        command.details.first_name = "Al".to_string();
        command.details.email = String::new();

        let notifications = command.validate();
        assert_eq!(notifications.len(), 2);
        assert!(notifications.contains_key("Name.FirstName"));
        assert!(notifications.contains_key("Email"));
    }
}
