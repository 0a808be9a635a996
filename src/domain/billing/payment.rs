use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{Contract, Notifiable, Notifications};
use super::value_objects::{Address, Document, Email};

// ============================================================================
// Payment Entity
// ============================================================================

/// How the payment was made, with the fields specific to each method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaymentMethod {
    #[serde(rename_all = "camelCase")]
    Boleto {
        bar_code: String,
        boleto_number: String,
    },
    #[serde(rename_all = "camelCase")]
    PayPal {
        transaction_code: String,
    },
    #[serde(rename_all = "camelCase")]
    CreditCard {
        card_holder_name: String,
        card_number: String,
        last_transaction_number: String,
    },
}

impl PaymentMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Boleto { .. } => "Boleto",
            PaymentMethod::PayPal { .. } => "PayPal",
            PaymentMethod::CreditCard { .. } => "CreditCard",
        }
    }

    fn validate(&self) -> Notifications {
        match self {
            PaymentMethod::Boleto { bar_code, boleto_number } => Contract::requires()
                .is_not_empty(bar_code, "BoletoPayment.BarCode", "Bar code is required")
                .is_not_empty(boleto_number, "BoletoPayment.BoletoNumber", "Boleto number is required")
                .into_notifications(),
            PaymentMethod::PayPal { transaction_code } => Contract::requires()
                .is_not_empty(transaction_code, "PayPalPayment.TransactionCode", "Transaction code is required")
                .into_notifications(),
            PaymentMethod::CreditCard { card_holder_name, card_number, last_transaction_number } => {
                Contract::requires()
                    .is_not_empty(card_holder_name, "CreditCardPayment.CardHolderName", "Card holder name is required")
                    .is_not_empty(card_number, "CreditCardPayment.CardNumber", "Card number is required")
                    .is_not_empty(
                        last_transaction_number,
                        "CreditCardPayment.LastTransactionNumber",
                        "Last transaction number is required",
                    )
                    .into_notifications()
            }
        }
    }
}

/// Fields shared by every payment method
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    pub paid_date: DateTime<Utc>,
    pub expire_date: DateTime<Utc>,
    pub total: Decimal,
    pub total_paid: Decimal,
    pub payer: String,
    pub payer_document: Document,
    pub address: Address,
    pub email: Email,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: Uuid,
    /// Short human-readable payment code
    pub number: String,
    pub paid_date: DateTime<Utc>,
    pub expire_date: DateTime<Utc>,
    pub total: Decimal,
    pub total_paid: Decimal,
    pub payer: String,
    pub payer_document: Document,
    pub address: Address,
    pub email: Email,
    pub method: PaymentMethod,
    #[serde(skip)]
    notifications: Notifications,
}

impl Payment {
    pub fn new(details: PaymentDetails, method: PaymentMethod) -> Self {
        let notifications = Contract::requires()
            .is_greater_than(details.total, Decimal::ZERO, "Payment.Total", "Total must be greater than zero")
            .is_greater_or_equals_than(
                details.total_paid,
                details.total,
                "Payment.TotalPaid",
                "Amount paid is lower than the payment total",
            )
            .join(&details.payer_document)
            .join(&details.address)
            .join(&details.email)
            .join(&method.validate())
            .into_notifications();

        Self {
            id: Uuid::new_v4(),
            number: generate_payment_number(),
            paid_date: details.paid_date,
            expire_date: details.expire_date,
            total: details.total,
            total_paid: details.total_paid,
            payer: details.payer,
            payer_document: details.payer_document,
            address: details.address,
            email: details.email,
            method,
            notifications,
        }
    }

    pub fn boleto(details: PaymentDetails, bar_code: impl Into<String>, boleto_number: impl Into<String>) -> Self {
        Self::new(
            details,
            PaymentMethod::Boleto {
                bar_code: bar_code.into(),
                boleto_number: boleto_number.into(),
            },
        )
    }

    pub fn paypal(details: PaymentDetails, transaction_code: impl Into<String>) -> Self {
        Self::new(
            details,
            PaymentMethod::PayPal {
                transaction_code: transaction_code.into(),
            },
        )
    }

    pub fn credit_card(
        details: PaymentDetails,
        card_holder_name: impl Into<String>,
        card_number: impl Into<String>,
        last_transaction_number: impl Into<String>,
    ) -> Self {
        Self::new(
            details,
            PaymentMethod::CreditCard {
                card_holder_name: card_holder_name.into(),
                card_number: card_number.into(),
                last_transaction_number: last_transaction_number.into(),
            },
        )
    }
}

impl Notifiable for Payment {
    fn notifications(&self) -> Notifications {
        self.notifications.clone()
    }
}

/// First 10 hex digits of a fresh v4 UUID, upper-cased
fn generate_payment_number() -> String {
    let mut number = Uuid::new_v4().simple().to_string();
    number.truncate(10);
    number.to_uppercase()
}

// ============================================================================
// Unit Tests
// ============================================================================
