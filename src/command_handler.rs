//! Interaction dispatch
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::{info, warn};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::reply::reply_ephemeral;
use crate::commands::{BotCommand, CommandContext, CommandRegistry};

pub const UNKNOWN_COMMAND_REPLY: &str = "❌ Unknown command.";

/// Routes slash command interactions to their handlers
#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new(context: CommandContext) -> Self {
        Self::with_registry(context, CommandRegistry::with_default_handlers())
    }

    pub fn with_registry(context: CommandContext, registry: CommandRegistry) -> Self {
        for command in registry.missing() {
            warn!("No handler registered for {command}");
        }
        CommandHandler {
            context: Arc::new(context),
            registry,
        }
    }

    pub fn context(&self) -> Arc<CommandContext> {
        Arc::clone(&self.context)
    }

    pub async fn handle_slash_command(
        &self,
        ctx: &Context,
        interaction: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let request_id = Uuid::new_v4();
        let name = interaction.data.name.as_str();

        info!(
            "[{request_id}] Processing slash command: {name} from user: {}",
            interaction.user.id
        );

        let Some((command, handler)) = BotCommand::from_name(name)
            .and_then(|command| self.registry.get(command).map(|handler| (command, handler)))
        else {
            warn!("[{request_id}] No handler for command '{name}'");
            return reply_ephemeral(&ctx.http, interaction, UNKNOWN_COMMAND_REPLY).await;
        };

        handler
            .handle(self.context(), ctx, command, interaction)
            .await?;

        info!("[{request_id}] ✅ {command} completed");
        Ok(())
    }
}
