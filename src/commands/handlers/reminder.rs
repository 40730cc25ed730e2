//! Reminder command handlers
//!
//! Handles: harassme, stopharassment
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::SlashCommandHandler;
use crate::commands::kind::BotCommand;
use crate::commands::reply::{defer_ephemeral, edit_reply, reply_ephemeral};
use crate::features::delivery::DirectMessenger;

pub const STARTED_REPLY: &str = "✅ Started sending periodic reminders to you!";
pub const START_FAILED_REPLY: &str = "❌ Failed to start periodic messages.";
pub const NOT_FOUND_REPLY: &str = "❌ No active periodic messages found.";

/// Handler for the caller's own repeating reminder
pub struct ReminderHandler;

#[async_trait]
impl SlashCommandHandler for ReminderHandler {
    fn commands(&self) -> &'static [BotCommand] {
        &[BotCommand::HarassMe, BotCommand::StopHarassment]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: BotCommand,
        interaction: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let user_id = interaction.user.id.0;

        match command {
            BotCommand::HarassMe => {
                defer_ephemeral(&serenity_ctx.http, interaction).await?;
                let messenger: Arc<dyn DirectMessenger> = serenity_ctx.http.clone();
                let reply = Self::start_for(&ctx, messenger, user_id).await;
                edit_reply(&serenity_ctx.http, interaction, &reply).await
            }
            BotCommand::StopHarassment => {
                let reply = Self::stop_for(&ctx, user_id);
                reply_ephemeral(&serenity_ctx.http, interaction, &reply).await
            }
            _ => Ok(()),
        }
    }
}

impl ReminderHandler {
    /// Start (or restart) the caller's schedule and build the reply
    pub async fn start_for(
        ctx: &CommandContext,
        messenger: Arc<dyn DirectMessenger>,
        user_id: u64,
    ) -> String {
        // The caller must be reachable before anything is scheduled
        if let Err(e) = messenger.resolve_user(user_id).await {
            error!("Error starting reminders for {user_id}: {e}");
            return START_FAILED_REPLY.to_string();
        }

        let started = ctx
            .reminders
            .start(user_id, messenger, ctx.reminder_settings.clone());

        if started.replaced {
            format!("{STARTED_REPLY} (your previous schedule was replaced)")
        } else {
            STARTED_REPLY.to_string()
        }
    }

    /// Stop the caller's schedule and build the reply
    pub fn stop_for(ctx: &CommandContext, user_id: u64) -> String {
        match ctx.reminders.stop(user_id) {
            Some(stopped) => {
                info!(
                    "User {user_id} stopped reminders started {} ({} delivered)",
                    stopped.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    stopped.deliveries
                );
                format!(
                    "✅ Stopped periodic messages! ({} delivered)",
                    stopped.deliveries
                )
            }
            None => NOT_FOUND_REPLY.to_string(),
        }
    }
}
