// ============================================================================
// Billing Domain - Students, Subscriptions and Payments
// ============================================================================
//
// This module contains ALL billing-specific code:
// - Value objects (Name, Document, Email, Address)
// - Entities (Student, Subscription, Payment)
// - Commands (CreateSubscriptionCommand)
// - Ports (StudentRepository, EmailService)
// - Errors (HandlerError)
// - Command Handler (SubscriptionHandler)
//
// ============================================================================

pub mod value_objects;
pub mod payment;
pub mod subscription;
pub mod student;
pub mod commands;
pub mod ports;
pub mod errors;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use payment::*;
pub use subscription::*;
pub use student::*;
pub use commands::*;
pub use ports::*;
pub use errors::*;
pub use command_handler::*;
