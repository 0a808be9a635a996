use chrono::{Months, Utc};
use std::sync::Arc;

use crate::config::SubscriptionConfig;
use crate::shared::{CommandResult, Notifications};
use crate::utils::retry_with_backoff;

use super::commands::CreateSubscriptionCommand;
use super::errors::HandlerError;
use super::payment::{Payment, PaymentDetails};
use super::ports::{EmailService, StudentRepository};
use super::student::Student;
use super::subscription::Subscription;
use super::value_objects::{Address, Document, DocumentType, Email, Name};

// ============================================================================
// Subscription Command Handler
// ============================================================================
//
// Orchestrates: Command → Uniqueness checks → Value objects → Entities
//               → Notifications → Repository → Welcome e-mail
//
// Broken rules come back as a failed CommandResult. Only unreachable
// collaborators produce an Err.
//
// ============================================================================

pub const REGISTER_FAILED: &str = "Subscription register failed";
pub const REGISTER_SUCCEEDED: &str = "Subscription successfully added";

pub struct SubscriptionHandler {
    repository: Arc<dyn StudentRepository>,
    email_service: Arc<dyn EmailService>,
    config: SubscriptionConfig,
}

impl SubscriptionHandler {
    pub fn new(repository: Arc<dyn StudentRepository>, email_service: Arc<dyn EmailService>) -> Self {
        Self {
            repository,
            email_service,
            config: SubscriptionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SubscriptionConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a student with a new, paid subscription
    pub async fn handle(&self, command: CreateSubscriptionCommand) -> Result<CommandResult, HandlerError> {
        let method = command.method.name();

        let command_notifications = command.validate();
        if !command_notifications.is_empty() {
            tracing::info!(
                method,
                notifications = command_notifications.len(),
                "Subscription command rejected"
            );
            return Ok(CommandResult::failure(REGISTER_FAILED, command_notifications));
        }

        let mut notifications = Notifications::new();
        let details = &command.details;

        if self.repository.document_exists(&details.document).await.map_err(HandlerError::Lookup)? {
            notifications.add("Document", "Document already in use");
        }

        if self.repository.email_exists(&details.email).await.map_err(HandlerError::Lookup)? {
            notifications.add("Email", "E-mail already in use");
        }

        let name = Name::new(&details.first_name, &details.last_name);
        let document = Document::new(&details.document, DocumentType::Cpf);
        let email = Email::new(&details.email);
        let address = Address::new(
            &details.street,
            &details.number,
            &details.neighborhood,
            &details.city,
            &details.state,
            &details.country,
            &details.zip_code,
        );

        let mut student = Student::new(name, document, email, address.clone());

        let expire_date = Utc::now().checked_add_months(Months::new(self.config.subscription_months));
        let mut subscription = Subscription::new(expire_date);

        let payment = Payment::new(
            PaymentDetails {
                paid_date: details.paid_date,
                expire_date: details.expire_date,
                total: details.total,
                total_paid: details.total_paid,
                payer: details.payer.clone(),
                payer_document: Document::new(&details.payer_document, details.payer_document_type),
                address,
                email: Email::new(&details.payer_email),
            },
            command.method.clone(),
        );

        subscription.add_payment(payment);
        notifications.absorb(&subscription);

        student.add_subscription(subscription);
        notifications.absorb(&student);

        if !notifications.is_empty() {
            tracing::info!(
                method,
                notifications = notifications.len(),
                "Subscription not registered"
            );
            return Ok(CommandResult::failure(REGISTER_FAILED, notifications));
        }

        self.repository
            .create_subscription(&student)
            .await
            .map_err(|source| HandlerError::Persist {
                student_id: student.id,
                source,
            })?;

        tracing::info!(student_id = %student.id, method, "Subscription registered");

        self.send_welcome_email(&student).await;

        Ok(CommandResult::success(REGISTER_SUCCEEDED))
    }

    /// Delivery failures are logged; the subscription is already stored
    async fn send_welcome_email(&self, student: &Student) {
        let full_name = student.name.to_string();
        let subject = self.config.welcome_subject_for(&full_name);
        let body = &self.config.welcome_body;

        let result = retry_with_backoff(&self.config.email_retry, "welcome e-mail", |_attempt| {
            self.email_service.send(&full_name, student.email.as_str(), &subject, body)
        })
        .await;

        if let Err(e) = result {
            tracing::error!(
                student_id = %student.id,
                error = %e,
                "Welcome e-mail not delivered"
            );
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
