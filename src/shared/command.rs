use serde::Serialize;

use super::notification::{Notification, Notifications};

// ============================================================================
// Command Result
// ============================================================================

/// Outcome of handling a command, returned to the caller as-is
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
    pub notifications: Vec<Notification>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            notifications: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>, notifications: Notifications) -> Self {
        Self {
            success: false,
            message: message.into(),
            notifications: notifications.into_vec(),
        }
    }

    pub fn has_notification(&self, key: &str, message: &str) -> bool {
        self.notifications
            .iter()
            .any(|n| n.key == key && n.message == message)
    }
}
