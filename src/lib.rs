//! Subscription management for an online course platform.
//!
//! Students register with a paid subscription (boleto, PayPal or credit
//! card). Value objects and entities validate themselves by collecting
//! notifications; [`SubscriptionHandler`] turns any collected notification
//! into a failed [`CommandResult`] before anything is persisted.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod utils;

pub use config::SubscriptionConfig;
pub use domain::billing::{CreateSubscriptionCommand, HandlerError, SubscriptionHandler};
pub use shared::{CommandResult, Notifiable, Notification, Notifications};
