//! # Core Module
//!
//! Configuration and error types shared by commands and features.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod error;

pub use config::{Config, ReminderSettings, MAX_REMINDER_INTERVAL_SECS};
pub use error::DeliveryError;
