use super::notification::{Notifiable, Notifications};

// ============================================================================
// Contract - Fluent Rule Builder
// ============================================================================
//
// Each rule appends a notification when it is broken and hands the contract
// back, so a value object states all of its rules in one chain:
//
//   Contract::requires()
//       .has_min_len(first, 3, "Name.FirstName", "...")
//       .has_max_len(first, 40, "Name.FirstName", "...")
//       .into_notifications()
//
// ============================================================================

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Contract {
    notifications: Notifications,
}

impl Contract {
    /// Start a new, empty rule chain
    pub fn requires() -> Self {
        Self::default()
    }

    fn check(mut self, holds: bool, key: &str, message: &str) -> Self {
        if !holds {
            self.notifications.add(key, message);
        }
        self
    }

    /// Length is counted in characters, not bytes
    pub fn has_min_len(self, value: &str, min: usize, key: &str, message: &str) -> Self {
        self.check(value.chars().count() >= min, key, message)
    }

    pub fn has_max_len(self, value: &str, max: usize, key: &str, message: &str) -> Self {
        self.check(value.chars().count() <= max, key, message)
    }

    pub fn has_len(self, value: &str, len: usize, key: &str, message: &str) -> Self {
        self.check(value.chars().count() == len, key, message)
    }

    /// Whitespace-only strings count as empty
    pub fn is_not_empty(self, value: &str, key: &str, message: &str) -> Self {
        self.check(!value.trim().is_empty(), key, message)
    }

    pub fn is_true(self, condition: bool, key: &str, message: &str) -> Self {
        self.check(condition, key, message)
    }

    pub fn is_false(self, condition: bool, key: &str, message: &str) -> Self {
        self.check(!condition, key, message)
    }

    pub fn are_equals<T: PartialEq>(self, left: T, right: T, key: &str, message: &str) -> Self {
        self.check(left == right, key, message)
    }

    /// Holds when `value > than`
    pub fn is_greater_than<T: PartialOrd>(self, value: T, than: T, key: &str, message: &str) -> Self {
        self.check(value > than, key, message)
    }

    /// Holds when `value >= than`
    pub fn is_greater_or_equals_than<T: PartialOrd>(
        self,
        value: T,
        than: T,
        key: &str,
        message: &str,
    ) -> Self {
        self.check(value >= than, key, message)
    }

    /// Holds when `value <= than`
    pub fn is_lower_or_equals_than<T: PartialOrd>(
        self,
        value: T,
        than: T,
        key: &str,
        message: &str,
    ) -> Self {
        self.check(value <= than, key, message)
    }

    pub fn is_email(self, value: &str, key: &str, message: &str) -> Self {
        self.check(is_well_formed_email(value), key, message)
    }

    /// Fold a validated part's notifications into the chain
    pub fn join(mut self, part: &impl Notifiable) -> Self {
        self.notifications.absorb(part);
        self
    }

    pub fn into_notifications(self) -> Notifications {
        self.notifications
    }
}

/// Structural e-mail check: `local@domain.tld`, no whitespace, one `@`,
/// and a domain made of non-empty dot-separated labels.
pub fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
