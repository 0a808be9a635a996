use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::{Contract, Notifiable, Notifications};
use super::payment::Payment;

// ============================================================================
// Subscription Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subscription {
    pub id: Uuid,
    pub created_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    /// `None` means the subscription never expires
    pub expire_date: Option<DateTime<Utc>>,
    deactivated: bool,
    payments: Vec<Payment>,
    #[serde(skip)]
    notifications: Notifications,
}

impl Subscription {
    pub fn new(expire_date: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            created_date: now,
            last_update_date: now,
            expire_date,
            deactivated: false,
            payments: Vec::new(),
            notifications: Notifications::new(),
        }
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Active unless explicitly deactivated or expired at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.deactivated && self.expire_date.is_none_or(|expire| expire > now)
    }

    pub fn add_payment(&mut self, payment: Payment) {
        if let Some(expire) = self.expire_date {
            self.notifications.extend(
                &Contract::requires()
                    .is_lower_or_equals_than(
                        payment.paid_date,
                        expire,
                        "Subscription.Payments",
                        "Payment date must not be after the subscription expiration",
                    )
                    .into_notifications(),
            );
        }

        self.payments.push(payment);
    }

    pub fn activate(&mut self) {
        self.deactivated = false;
        self.last_update_date = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.deactivated = true;
        self.last_update_date = Utc::now();
    }
}

impl Notifiable for Subscription {
    fn notifications(&self) -> Notifications {
        let mut notifications = Notifications::new();
        for payment in &self.payments {
            notifications.absorb(payment);
        }
        notifications.extend(&self.notifications);
        notifications
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::payment::PaymentDetails;
    use crate::domain::billing::value_objects::{Address, Document, DocumentType, Email};
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn create_test_payment(paid_date: DateTime<Utc>, total: i64) -> Payment {
        Payment::paypal(
            PaymentDetails {
                paid_date,
                expire_date: paid_date + Duration::days(5),
                total: Decimal::new(total, 0),
                total_paid: Decimal::new(total, 0),
                payer: "Wayne Corp".to_string(),
                payer_document: Document::new("53020223385", DocumentType::Cpf),
                address: Address::new("Rua 1", "99", "Vila Xavier", "Araraquara", "SP", "BR", "14800000"),
                email: Email::new("batman@dc.com"),
            },
            "12345678900",
        )
    }

    #[test]
    fn test_open_ended_subscription_is_active() {
        let subscription = Subscription::new(None);

        assert!(subscription.is_active());
        assert!(subscription.payments().is_empty());
        assert!(subscription.is_valid());
    }

    #[test]
    fn test_expired_subscription_is_inactive() {
        let now = Utc::now();
        let subscription = Subscription::new(Some(now - Duration::days(1)));

        assert!(!subscription.is_active_at(now));
        assert!(Subscription::new(Some(now + Duration::days(30))).is_active_at(now));
    }

    #[test]
    fn test_deactivate_and_activate() {
        let mut subscription = Subscription::new(None);
        let created = subscription.last_update_date;

        subscription.deactivate();
        assert!(!subscription.is_active());
        assert!(subscription.last_update_date >= created);

        subscription.activate();
        assert!(subscription.is_active());
    }

    #[test]
    fn test_add_payment() {
        let mut subscription = Subscription::new(Some(Utc::now() + Duration::days(30)));
        subscription.add_payment(create_test_payment(Utc::now(), 60));

        assert_eq!(subscription.payments().len(), 1);
        assert!(subscription.is_valid());
    }

    #[test]
    fn test_payment_after_expiration_is_flagged() {
        let now = Utc::now();
        let mut subscription = Subscription::new(Some(now + Duration::days(30)));
        subscription.add_payment(create_test_payment(now + Duration::days(31), 60));

        assert!(subscription.is_invalid());
        assert!(subscription.notifications().contains_key("Subscription.Payments"));
    }

    #[test]
    fn test_payment_notifications_surface() {
        let mut subscription = Subscription::new(None);
        subscription.add_payment(create_test_payment(Utc::now(), 0));

        assert!(subscription.notifications().contains_key("Payment.Total"));
    }
}
