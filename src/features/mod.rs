//! # Features
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod delivery;
pub mod reminders;

pub use delivery::{DirectMessenger, Recipient};
pub use reminders::ReminderTable;
