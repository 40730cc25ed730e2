//! Slash command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use super::context::CommandContext;
use super::kind::BotCommand;

/// Trait for slash command handlers
///
/// Each handler serves one or more [`BotCommand`]s. Handlers are registered
/// with a `CommandRegistry` and dispatched on the parsed command.
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Commands this handler processes
    fn commands(&self) -> &'static [BotCommand];

    /// Handle the slash command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context (reminder table, settings)
    /// * `serenity_ctx` - Serenity context for Discord API calls
    /// * `command` - The already-parsed command being served
    /// * `interaction` - The slash command interaction to answer
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: BotCommand,
        interaction: &ApplicationCommandInteraction,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}
}
