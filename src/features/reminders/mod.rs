//! # Reminders Feature
//!
//! Self-targeted repeating DMs, at most one active schedule per user.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod table;

pub use table::{deliver_reminder, ReminderTable, StartedReminder, StoppedReminder};
