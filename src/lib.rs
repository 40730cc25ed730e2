// Core layer - shared types and configuration
pub mod core;

// Features layer - direct messages and reminders
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

pub use crate::core::Config;

pub use features::{DirectMessenger, ReminderTable};
