// ============================================================================
// Shared Kernel
// ============================================================================
//
// Building blocks used by every bounded context:
// - Notifications and the Notifiable capability
// - Contract (fluent validation rules)
// - Command results
//
// Nothing in here knows about students, subscriptions or payments.
//
// ============================================================================

pub mod notification;
pub mod contract;
pub mod command;

pub use notification::{Notification, Notifications, Notifiable};
pub use contract::{Contract, is_well_formed_email};
pub use command::CommandResult;
