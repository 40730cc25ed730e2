//! # Slash Commands (/)
//!
//! Command definitions, registration with Discord, and option readers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

mod reminder;
mod video;

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::http::Http;
use serenity::model::application::command::Command;
use serenity::model::application::interaction::application_command::{
    CommandDataOption, CommandDataOptionValue,
};
use serenity::model::id::GuildId;
use serenity::model::user::User;

use super::kind::BotCommand;

/// Definition Discord shows for a command
pub fn create_command(command: BotCommand) -> CreateApplicationCommand {
    match command {
        BotCommand::SendVideo => video::create_sendvideo_command(),
        BotCommand::SendVideoById => video::create_sendvideobyid_command(),
        BotCommand::HarassMe => reminder::create_harassme_command(),
        BotCommand::StopHarassment => reminder::create_stopharassment_command(),
    }
}

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    BotCommand::ALL.into_iter().map(create_command).collect()
}

/// Where commands get registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationScope {
    /// Every guild and DM (may take up to an hour to propagate)
    Global,
    /// A single guild, updated instantly (development)
    Guild(GuildId),
}

impl RegistrationScope {
    /// Guild scope when a numeric guild id is configured, global otherwise
    pub fn from_guild_id(guild_id: Option<&str>) -> Self {
        guild_id
            .and_then(|id| id.trim().parse::<u64>().ok())
            .map(|id| RegistrationScope::Guild(GuildId(id)))
            .unwrap_or(RegistrationScope::Global)
    }
}

/// Bulk-overwrites an application's command set
///
/// Overwriting (rather than creating one by one) makes registration
/// idempotent: the set afterwards is exactly what was sent.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// Replace the command set in `scope`; returns how many commands are now defined
    async fn overwrite_commands(
        &self,
        scope: RegistrationScope,
        commands: Vec<CreateApplicationCommand>,
    ) -> Result<usize>;
}

#[async_trait]
impl CommandRegistrar for Http {
    async fn overwrite_commands(
        &self,
        scope: RegistrationScope,
        commands: Vec<CreateApplicationCommand>,
    ) -> Result<usize> {
        let registered = match scope {
            RegistrationScope::Global => {
                Command::set_global_application_commands(self, |builder| {
                    for command in commands {
                        builder.add_application_command(command);
                    }
                    builder
                })
                .await?
            }
            RegistrationScope::Guild(guild_id) => {
                guild_id
                    .set_application_commands(self, |builder| {
                        for command in commands {
                            builder.add_application_command(command);
                        }
                        builder
                    })
                    .await?
            }
        };
        Ok(registered.len())
    }
}

/// Registers every slash command in `scope`
pub async fn register_commands(
    registrar: &dyn CommandRegistrar,
    scope: RegistrationScope,
) -> Result<usize> {
    let count = registrar
        .overwrite_commands(scope, create_slash_commands())
        .await?;

    match scope {
        RegistrationScope::Global => {
            info!("Global slash commands registered successfully ({count} commands)")
        }
        RegistrationScope::Guild(guild_id) => {
            info!("Guild slash commands registered for guild {guild_id} ({count} commands)")
        }
    }
    Ok(count)
}

/// Utility function to get string option from slash command
pub fn get_string_option(options: &[CommandDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

/// Utility function to get the user Discord resolved for a user option
pub fn get_user_option(options: &[CommandDataOption], name: &str) -> Option<User> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.resolved.as_ref())
        .and_then(|val| match val {
            CommandDataOptionValue::User(user, _) => Some(user.clone()),
            _ => None,
        })
}
