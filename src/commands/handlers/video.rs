//! Video relay command handlers
//!
//! Handles: sendvideo, sendvideobyid
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
use crate::commands::reply::{defer_ephemeral, edit_reply};
use crate::commands::slash::{get_string_option, get_user_option};
use crate::core::DeliveryError;
use crate::features::delivery::{relay_video, DirectMessenger, Recipient, VideoTarget};

pub const USER_NOT_FOUND_REPLY: &str = "❌ User not found. Please check the user ID.";
pub const DM_BLOCKED_REPLY: &str =
    "❌ Cannot send messages to this user. They may have DMs disabled.";
pub const SEND_FAILED_REPLY: &str = "❌ Failed to send video. Please try again later.";

/// Handler for `/sendvideo` and `/sendvideobyid`
pub struct VideoHandler;

#[async_trait]
impl SlashCommandHandler for VideoHandler {
    fn commands(&self) -> &'static [BotCommand] {
        &[BotCommand::SendVideo, BotCommand::SendVideoById]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        serenity_ctx: &Context,
        command: BotCommand,
        interaction: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let options = &interaction.data.options;

        let target = match command {
            BotCommand::SendVideo => {
                let user = get_user_option(options, "user")
                    .ok_or_else(|| anyhow::anyhow!("Missing user parameter"))?;
                VideoTarget::Resolved(Recipient::from(&user))
            }
            BotCommand::SendVideoById => VideoTarget::ById(
                get_string_option(options, "userid")
                    .ok_or_else(|| anyhow::anyhow!("Missing userid parameter"))?,
            ),
            _ => return Ok(()),
        };
        let video_url = get_string_option(options, "videourl")
            .ok_or_else(|| anyhow::anyhow!("Missing videourl parameter"))?;
        let message = get_string_option(options, "message");

        defer_ephemeral(&serenity_ctx.http, interaction).await?;

        info!(
            "{} from user {} with url {video_url}",
            command, interaction.user.id
        );

        let reply = Self::send_video(
            &*serenity_ctx.http,
            target,
            &video_url,
            message.as_deref(),
        )
        .await;

        edit_reply(&serenity_ctx.http, interaction, &reply).await
    }
}

impl VideoHandler {
    /// Relay the video and turn the outcome into the invoker's reply
    pub async fn send_video(
        messenger: &dyn DirectMessenger,
        target: VideoTarget,
        video_url: &str,
        message: Option<&str>,
    ) -> String {
        let by_id = matches!(target, VideoTarget::ById(_));

        match relay_video(messenger, target, video_url, message).await {
            Ok(recipient) => success_reply(&recipient, by_id),
            Err(e) => {
                error!("Error sending video: {e}");
                failure_reply(&e).to_string()
            }
        }
    }
}

fn success_reply(recipient: &Recipient, by_id: bool) -> String {
    if by_id {
        format!(
            "✅ Video sent successfully to {} (ID: {})!",
            recipient.tag, recipient.id
        )
    } else {
        format!("✅ Video sent successfully to {}!", recipient.tag)
    }
}

fn failure_reply(err: &DeliveryError) -> &'static str {
    match err {
        DeliveryError::UserNotFound(_) => USER_NOT_FOUND_REPLY,
        DeliveryError::DmBlocked(_) => DM_BLOCKED_REPLY,
        DeliveryError::MissingAttachment(_) | DeliveryError::Other(_) => SEND_FAILED_REPLY,
    }
}
