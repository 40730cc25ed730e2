//! Direct-message failure taxonomy
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Classify Discord JSON error codes into user-facing failure kinds

use serenity::http::error::Error as HttpError;
use std::path::PathBuf;
use thiserror::Error;

/// Discord JSON error code: Unknown User
pub const UNKNOWN_USER_CODE: isize = 10013;
/// Discord JSON error code: Cannot send messages to this user
pub const CANNOT_MESSAGE_USER_CODE: isize = 50007;

/// Why a direct message could not be delivered
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The target id does not name a Discord user.
    #[error("user {0} not found")]
    UserNotFound(String),

    /// The target's privacy settings reject DMs from the bot.
    #[error("user {0} does not accept direct messages")]
    DmBlocked(String),

    /// The local file meant to be attached is not there.
    #[error("attachment {} is missing", .0.display())]
    MissingAttachment(PathBuf),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeliveryError {
    /// Classify a serenity error raised while talking to `user_id`
    pub fn from_serenity(user_id: &str, err: serenity::Error) -> Self {
        let code = discord_error_code(&err);
        Self::classify(user_id, code, anyhow::Error::new(err))
    }

    /// Map a Discord JSON error code to a failure kind; unknown codes keep `cause`
    pub fn classify(user_id: &str, code: Option<isize>, cause: anyhow::Error) -> Self {
        match code {
            Some(UNKNOWN_USER_CODE) => DeliveryError::UserNotFound(user_id.to_string()),
            Some(CANNOT_MESSAGE_USER_CODE) => DeliveryError::DmBlocked(user_id.to_string()),
            _ => DeliveryError::Other(cause),
        }
    }
}

/// Extract the JSON error code Discord attached to a failed request, if any
pub fn discord_error_code(err: &serenity::Error) -> Option<isize> {
    match err {
        serenity::Error::Http(http_err) => match &**http_err {
            HttpError::UnsuccessfulRequest(response) => Some(response.error.code),
            _ => None,
        },
        _ => None,
    }
}
