//! Video relay slash commands: /sendvideo, /sendvideobyid

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

/// Creates the sendvideo command
pub fn create_sendvideo_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("sendvideo")
        .description("Send a video message to the specified user")
        .create_option(|option| {
            option
                .name("user")
                .description("The user to send the video to")
                .kind(CommandOptionType::User)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("videourl")
                .description("The URL of the video to send")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("message")
                .description("Optional message to include with the video")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}

/// Creates the sendvideobyid command
pub fn create_sendvideobyid_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("sendvideobyid")
        .description("Send a video message to a user by their ID")
        .create_option(|option| {
            option
                .name("userid")
                .description("The Discord user ID to send the video to")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("videourl")
                .description("The URL of the video to send")
                .kind(CommandOptionType::String)
                .required(true)
        })
        .create_option(|option| {
            option
                .name("message")
                .description("Optional message to include with the video")
                .kind(CommandOptionType::String)
                .required(false)
        })
        .to_owned()
}
