//! Direct-message transport
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: DirectMessenger trait with a serenity Http implementation

use async_trait::async_trait;
use log::debug;
use serenity::http::Http;
use serenity::model::channel::AttachmentType;
use serenity::model::id::UserId;
use serenity::model::user::User;
use std::path::Path;

use crate::core::DeliveryError;

/// A resolved DM target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub id: u64,
    /// Display tag, `name#1234` (or the bare name for migrated accounts)
    pub tag: String,
}

impl From<&User> for Recipient {
    fn from(user: &User) -> Self {
        Recipient {
            id: user.id.0,
            tag: user.tag(),
        }
    }
}

/// Sends direct messages on behalf of the bot
///
/// Implemented by serenity's `Http` client in production. Everything that
/// talks to users goes through this trait so handlers and the reminder table
/// can be exercised without a gateway connection.
#[async_trait]
pub trait DirectMessenger: Send + Sync {
    /// Look up a user by id
    async fn resolve_user(&self, user_id: u64) -> Result<Recipient, DeliveryError>;

    /// Open (or reuse) a DM channel with the user and send plain text
    async fn send_text(&self, user_id: u64, content: &str) -> Result<(), DeliveryError>;

    /// Open (or reuse) a DM channel with the user and send text with a local file attached
    async fn send_with_attachment(
        &self,
        user_id: u64,
        content: &str,
        attachment: &Path,
    ) -> Result<(), DeliveryError>;
}

#[async_trait]
impl DirectMessenger for Http {
    async fn resolve_user(&self, user_id: u64) -> Result<Recipient, DeliveryError> {
        let user = UserId(user_id)
            .to_user(self)
            .await
            .map_err(|e| DeliveryError::from_serenity(&user_id.to_string(), e))?;
        Ok(Recipient::from(&user))
    }

    async fn send_text(&self, user_id: u64, content: &str) -> Result<(), DeliveryError> {
        let id = user_id.to_string();
        let channel = UserId(user_id)
            .create_dm_channel(self)
            .await
            .map_err(|e| DeliveryError::from_serenity(&id, e))?;
        channel
            .send_message(self, |m| m.content(content))
            .await
            .map_err(|e| DeliveryError::from_serenity(&id, e))?;
        debug!("Sent DM to {user_id} ({} chars)", content.len());
        Ok(())
    }

    async fn send_with_attachment(
        &self,
        user_id: u64,
        content: &str,
        attachment: &Path,
    ) -> Result<(), DeliveryError> {
        let id = user_id.to_string();
        let channel = UserId(user_id)
            .create_dm_channel(self)
            .await
            .map_err(|e| DeliveryError::from_serenity(&id, e))?;
        channel
            .send_message(self, |m| {
                m.content(content)
                    .add_file(AttachmentType::Path(attachment))
            })
            .await
            .map_err(|e| DeliveryError::from_serenity(&id, e))?;
        debug!("Sent DM with {} to {user_id}", attachment.display());
        Ok(())
    }
}
