use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info, warn};
use serenity::async_trait;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use grindbot::commands::{register_commands, CommandContext, CommandHandler, RegistrationScope};
use grindbot::core::Config;

const COMMAND_ERROR_REPLY: &str =
    "❌ Sorry, I encountered an error processing your command. Please try again.";

struct Handler {
    command_handler: Arc<CommandHandler>,
    scope: RegistrationScope,
}

impl Handler {
    fn new(command_handler: CommandHandler, scope: RegistrationScope) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            scope,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.tag());
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        match self.scope {
            RegistrationScope::Guild(guild_id) => {
                info!("🔧 Development mode: Registering commands for guild {guild_id}")
            }
            RegistrationScope::Global => info!("🌍 Registering commands globally"),
        }

        // Registration failure leaves whatever commands Discord already has
        if let Err(e) = register_commands(&*ctx.http, self.scope).await {
            error!("❌ Failed to register slash commands: {e}");
        } else {
            info!("✅ Successfully registered slash commands");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                if let Err(e) = self
                    .command_handler
                    .handle_slash_command(&ctx, &command)
                    .await
                {
                    error!(
                        "Error handling slash command '{}': {}",
                        command.data.name, e
                    );

                    // Try to edit the deferred response, fallback to new response if that fails
                    if command
                        .edit_original_interaction_response(&ctx.http, |response| {
                            response.content(COMMAND_ERROR_REPLY)
                        })
                        .await
                        .is_err()
                    {
                        let _ = command
                            .create_interaction_response(&ctx.http, |response| {
                                response
                                    .kind(InteractionResponseType::ChannelMessageWithSource)
                                    .interaction_response_data(|message| {
                                        message.content(COMMAND_ERROR_REPLY).ephemeral(true)
                                    })
                            })
                            .await;
                    }
                }
            }
            other => {
                debug!("Ignoring non-command interaction: {:?}", other.kind());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    // Panics in spawned tasks only end that task; make sure they are seen
    std::panic::set_hook(Box::new(|panic| {
        error!("Unhandled panic: {panic}");
    }));

    info!("Starting grindbot...");

    let attachment_present = tokio::fs::metadata(&config.reminder.attachment_path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !attachment_present {
        warn!(
            "⚠️ Reminder attachment {} not found; reminders will fail until it exists",
            config.reminder.attachment_path.display()
        );
    }

    let scope = RegistrationScope::from_guild_id(config.discord_guild_id.as_deref());
    let command_handler = CommandHandler::new(CommandContext::new(config.reminder.clone()));
    let handler = Handler::new(command_handler, scope);

    let intents = GatewayIntents::GUILDS | GatewayIntents::DIRECT_MESSAGES;

    // Build the Discord client with proper gateway configuration
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Discord API outage");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
