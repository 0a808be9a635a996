// ============================================================================
// Infrastructure - Adapters for the Billing Ports
// ============================================================================

pub mod student_store;
pub mod mailer;

pub use student_store::InMemoryStudentRepository;
pub use mailer::{LoggingEmailService, SentEmail};
