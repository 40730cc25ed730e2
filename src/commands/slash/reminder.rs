//! Reminder slash commands: /harassme, /stopharassment

use serenity::builder::CreateApplicationCommand;

/// Creates the harassme command
pub fn create_harassme_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("harassme")
        .description("Start receiving periodic video messages")
        .to_owned()
}

/// Creates the stopharassment command
pub fn create_stopharassment_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("stopharassment")
        .description("Stop receiving periodic video messages")
        .to_owned()
}
