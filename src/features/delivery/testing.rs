//! In-memory DirectMessenger for tests

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::messenger::{DirectMessenger, Recipient};
use crate::core::DeliveryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub user_id: u64,
    pub content: String,
    pub attachment: Option<PathBuf>,
}

/// Records every DM instead of sending it
#[derive(Default)]
pub struct RecordingMessenger {
    users: HashMap<u64, String>,
    blocked: HashSet<u64>,
    broken: bool,
    hanging: bool,
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: u64, tag: &str) -> Self {
        self.users.insert(id, tag.to_string());
        self
    }

    /// Known user who rejects DMs
    pub fn with_blocked_user(mut self, id: u64, tag: &str) -> Self {
        self.users.insert(id, tag.to_string());
        self.blocked.insert(id);
        self
    }

    /// Every send fails with an unclassified error
    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    /// Sends never complete
    pub fn hanging(mut self) -> Self {
        self.hanging = true;
        self
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    async fn check_target(&self, user_id: u64) -> Result<(), DeliveryError> {
        if self.hanging {
            std::future::pending::<()>().await;
        }
        if self.broken {
            return Err(DeliveryError::Other(anyhow::anyhow!("gateway unavailable")));
        }
        if !self.users.contains_key(&user_id) {
            return Err(DeliveryError::UserNotFound(user_id.to_string()));
        }
        if self.blocked.contains(&user_id) {
            return Err(DeliveryError::DmBlocked(user_id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectMessenger for RecordingMessenger {
    async fn resolve_user(&self, user_id: u64) -> Result<Recipient, DeliveryError> {
        self.users
            .get(&user_id)
            .map(|tag| Recipient {
                id: user_id,
                tag: tag.clone(),
            })
            .ok_or_else(|| DeliveryError::UserNotFound(user_id.to_string()))
    }

    async fn send_text(&self, user_id: u64, content: &str) -> Result<(), DeliveryError> {
        self.check_target(user_id).await?;
        self.sent.lock().unwrap().push(SentMessage {
            user_id,
            content: content.to_string(),
            attachment: None,
        });
        Ok(())
    }

    async fn send_with_attachment(
        &self,
        user_id: u64,
        content: &str,
        attachment: &Path,
    ) -> Result<(), DeliveryError> {
        self.check_target(user_id).await?;
        self.sent.lock().unwrap().push(SentMessage {
            user_id,
            content: content.to_string(),
            attachment: Some(attachment.to_path_buf()),
        });
        Ok(())
    }
}
