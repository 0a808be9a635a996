use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::RetryConfig;

// ============================================================================
// Subscription Handler Configuration
// ============================================================================

/// Environment variable holding the path of a JSON config file
pub const CONFIG_PATH_ENV: &str = "PAYMENT_CONTEXT_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionConfig {
    /// Length of a new subscription, counted from registration
    pub subscription_months: u32,
    /// `{name}` is replaced with the student's full name
    pub welcome_subject: String,
    pub welcome_body: String,
    pub email_retry: RetryConfig,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            subscription_months: 1,
            welcome_subject: "Welcome {name}!".to_string(),
            welcome_body: "Your subscription has been approved. Go ahead and create your study plan."
                .to_string(),
            email_retry: RetryConfig::default(),
        }
    }
}

impl SubscriptionConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load from the file named by `PAYMENT_CONTEXT_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn welcome_subject_for(&self, name: &str) -> String {
        self.welcome_subject.replace("{name}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = SubscriptionConfig::default();

        assert_eq!(config.subscription_months, 1);
        assert_eq!(config.welcome_subject_for("Bruce Wayne"), "Welcome Bruce Wayne!");
        assert_eq!(config.email_retry, RetryConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SubscriptionConfig = serde_json::from_str(
            r#"{ "subscription_months": 12, "email_retry": { "max_attempts": 1 } }"#,
        )
        .unwrap();

        assert_eq!(config.subscription_months, 12);
        assert_eq!(config.welcome_body, SubscriptionConfig::default().welcome_body);
        assert_eq!(config.email_retry.max_attempts, 1);
        assert_eq!(config.email_retry.initial_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_from_missing_file_fails() {
        let result = SubscriptionConfig::from_file("/nonexistent/payment_context.json");
        assert!(result.is_err());
    }
}
