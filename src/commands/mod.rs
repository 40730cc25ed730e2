//! # Command System
//!
//! Slash command (/) handling for Discord interactions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod context;
pub mod handler;
pub mod handlers;
pub mod kind;
pub mod registry;
pub mod reply;
pub mod slash;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::CommandHandler;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::SlashCommandHandler;
pub use kind::BotCommand;
pub use registry::CommandRegistry;

pub use slash::{
    create_command, create_slash_commands, get_string_option, get_user_option, register_commands,
    CommandRegistrar, RegistrationScope,
};
