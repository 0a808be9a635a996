use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Notifications - Soft Validation Failures
// ============================================================================
//
// Validated objects never fail construction. Broken rules are recorded as
// (key, message) pairs and the caller decides what to do with them.
//
// ============================================================================

/// A single broken rule, keyed by the field it concerns (e.g. `Name.FirstName`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub key: String,
    pub message: String,
}

impl Notification {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Ordered list of notifications owned by a validated object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.push(Notification::new(key, message));
    }

    pub fn extend(&mut self, other: &Notifications) {
        self.0.extend(other.0.iter().cloned());
    }

    /// Copy every notification of a validated part into this list
    pub fn absorb(&mut self, part: &impl Notifiable) {
        self.extend(&part.notifications());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.0.iter()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|n| n.key == key)
    }

    pub fn into_vec(self) -> Vec<Notification> {
        self.0
    }
}

impl From<Vec<Notification>> for Notifications {
    fn from(items: Vec<Notification>) -> Self {
        Self(items)
    }
}

impl IntoIterator for Notifications {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notifications {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Notifiable - Capability Shared by Every Validated Object
// ============================================================================

/// Anything that reports its own broken rules.
///
/// Composite objects (a `Student` holding a `Name`, a `Subscription` holding
/// payments) return the union of their parts' notifications and their own,
/// so `is_valid` on the root covers the whole graph.
pub trait Notifiable {
    fn notifications(&self) -> Notifications;

    fn is_valid(&self) -> bool {
        self.notifications().is_empty()
    }

    fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

impl Notifiable for Notifications {
    fn notifications(&self) -> Notifications {
        self.clone()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
