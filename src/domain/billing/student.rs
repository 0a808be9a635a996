use serde::Serialize;
use uuid::Uuid;

use crate::shared::{Contract, Notifiable, Notifications};
use super::subscription::Subscription;
use super::value_objects::{Address, Document, Email, Name};

// ============================================================================
// Student Entity
// ============================================================================
//
// Invariant: a student holds at most one active subscription. A second one
// is rejected (recorded as a notification) rather than replacing the first.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: Uuid,
    pub name: Name,
    pub document: Document,
    pub email: Email,
    pub address: Address,
    subscriptions: Vec<Subscription>,
    #[serde(skip)]
    notifications: Notifications,
}

impl Student {
    pub fn new(name: Name, document: Document, email: Email, address: Address) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            document,
            email,
            address,
            subscriptions: Vec::new(),
            notifications: Notifications::new(),
        }
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn active_subscription(&self) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.is_active())
    }

    /// Attach a paid subscription. Rejected when another subscription is
    /// still active or when the new one carries no payment.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        let rules = Contract::requires()
            .is_false(
                self.active_subscription().is_some(),
                "Student.Subscriptions",
                "You already have an active subscription",
            )
            .is_greater_than(
                subscription.payments().len(),
                0,
                "Student.Subscriptions.Payments",
                "This subscription has no payments yet",
            )
            .into_notifications();

        if !rules.is_empty() {
            tracing::debug!(
                student_id = %self.id,
                subscription_id = %subscription.id,
                rejected = rules.len(),
                "Subscription not attached"
            );
            self.notifications.extend(&rules);
            return;
        }

        self.subscriptions.push(subscription);
    }
}

/// Covers the student's value objects and the subscription rules. Attached
/// subscriptions report their own payments separately.
impl Notifiable for Student {
    fn notifications(&self) -> Notifications {
        let mut notifications = Contract::requires()
            .join(&self.name)
            .join(&self.document)
            .join(&self.email)
            .join(&self.address)
            .into_notifications();

        notifications.extend(&self.notifications);
        notifications
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
