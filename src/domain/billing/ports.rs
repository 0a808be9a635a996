use anyhow::Result;
use async_trait::async_trait;

use super::student::Student;

// ============================================================================
// Billing Ports - Collaborators the Handler Depends On
// ============================================================================

/// Student persistence
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// True when a student with this document number is already registered
    async fn document_exists(&self, document: &str) -> Result<bool>;

    /// True when a student with this e-mail address is already registered
    async fn email_exists(&self, email: &str) -> Result<bool>;

    /// Store a student together with its subscriptions and payments
    async fn create_subscription(&self, student: &Student) -> Result<()>;
}

/// Outgoing e-mail
#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, to_name: &str, to_address: &str, subject: &str, body: &str) -> Result<()>;
}
