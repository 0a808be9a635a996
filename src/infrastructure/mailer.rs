use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::domain::billing::EmailService;

// ============================================================================
// Logging E-mail Service
// ============================================================================
//
// Stand-in for a real mail transport: every message is logged and kept in
// an outbox that callers can inspect.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentEmail {
    pub to_name: String,
    pub to_address: String,
    pub subject: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct LoggingEmailService {
    outbox: Mutex<Vec<SentEmail>>,
}

impl LoggingEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn outbox(&self) -> Vec<SentEmail> {
        self.outbox.lock().await.clone()
    }
}

#[async_trait]
impl EmailService for LoggingEmailService {
    async fn send(&self, to_name: &str, to_address: &str, subject: &str, body: &str) -> Result<()> {
        tracing::info!(
            to = %to_address,
            subject = %subject,
            "📧 Sending e-mail"
        );

        self.outbox.lock().await.push(SentEmail {
            to_name: to_name.to_string(),
            to_address: to_address.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            sent_at: Utc::now(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sent_messages_land_in_outbox() {
        let mailer = LoggingEmailService::new();
        mailer
            .send("Bruce Wayne", "batman@dc.com", "Welcome Bruce Wayne!", "Hello")
            .await
            .unwrap();

        let outbox = mailer.outbox().await;
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox[0].to_name, "Bruce Wayne");
        assert_eq!(outbox[0].to_address, "batman@dc.com");
        assert_eq!(outbox[0].subject, "Welcome Bruce Wayne!");
        assert_eq!(outbox[0].body, "Hello");
    }
}
