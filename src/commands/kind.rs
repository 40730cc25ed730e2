//! The closed set of slash commands this bot serves
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::fmt;

/// Every slash command the bot registers and dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotCommand {
    /// `/sendvideo` - DM a video link to a picked user
    SendVideo,
    /// `/sendvideobyid` - DM a video link to a user given by id
    SendVideoById,
    /// `/harassme` - start the caller's repeating reminder
    HarassMe,
    /// `/stopharassment` - stop the caller's repeating reminder
    StopHarassment,
}

impl BotCommand {
    pub const ALL: [BotCommand; 4] = [
        BotCommand::SendVideo,
        BotCommand::SendVideoById,
        BotCommand::HarassMe,
        BotCommand::StopHarassment,
    ];

    /// Name as registered with Discord
    pub fn name(self) -> &'static str {
        match self {
            BotCommand::SendVideo => "sendvideo",
            BotCommand::SendVideoById => "sendvideobyid",
            BotCommand::HarassMe => "harassme",
            BotCommand::StopHarassment => "stopharassment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}
