//! Video relay: one-off DMs carrying a video link
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use log::info;

use super::content::compose_video_message;
use super::messenger::{DirectMessenger, Recipient};
use crate::core::DeliveryError;

/// Who a relayed video goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoTarget {
    /// A user Discord already resolved from a user option
    Resolved(Recipient),
    /// A raw id string typed by the invoker; looked up before sending
    ById(String),
}

/// Parse a user id typed into a string option
///
/// Anything that is not a Discord snowflake can never name a user, so it is
/// reported the same way Discord reports an unknown id.
pub fn parse_user_id(raw: &str) -> Result<u64, DeliveryError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| DeliveryError::UserNotFound(raw.to_string()))
}

/// Resolve the target if needed and DM it the composed video message
pub async fn relay_video(
    messenger: &dyn DirectMessenger,
    target: VideoTarget,
    video_url: &str,
    message: Option<&str>,
) -> Result<Recipient, DeliveryError> {
    let recipient = match target {
        VideoTarget::Resolved(recipient) => recipient,
        VideoTarget::ById(raw) => {
            let user_id = parse_user_id(&raw)?;
            messenger.resolve_user(user_id).await?
        }
    };

    let content = compose_video_message(video_url, message);
    messenger.send_text(recipient.id, &content).await?;

    info!("📨 Relayed video to {} ({})", recipient.tag, recipient.id);
    Ok(recipient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::delivery::testing::RecordingMessenger;

    fn alice() -> Recipient {
        Recipient {
            id: 42,
            tag: "alice#0001".to_string(),
        }
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("123456789012345678").unwrap(), 123456789012345678);
        assert_eq!(parse_user_id(" 42 ").unwrap(), 42);
        assert!(matches!(parse_user_id("abc"), Err(DeliveryError::UserNotFound(_))));
        assert!(matches!(parse_user_id("0"), Err(DeliveryError::UserNotFound(_))));
        assert!(matches!(parse_user_id("-5"), Err(DeliveryError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_relay_to_resolved_user_with_message() {
        let messenger = RecordingMessenger::new().with_user(42, "alice#0001");

        let recipient = relay_video(
            &messenger,
            VideoTarget::Resolved(alice()),
            "http://x/y.mp4",
            Some("train hard"),
        )
        .await
        .unwrap();

        assert_eq!(recipient, alice());
        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].user_id, 42);
        assert_eq!(sent[0].content, "train hard\nhttp://x/y.mp4");
        assert_eq!(sent[0].attachment, None);
    }

    #[tokio::test]
    async fn test_relay_without_message_sends_url_only() {
        let messenger = RecordingMessenger::new().with_user(42, "alice#0001");

        relay_video(&messenger, VideoTarget::Resolved(alice()), "http://x/y.mp4", None)
            .await
            .unwrap();

        assert_eq!(messenger.sent()[0].content, "http://x/y.mp4");
    }

    #[tokio::test]
    async fn test_relay_by_id_resolves_tag() {
        let messenger = RecordingMessenger::new().with_user(7, "bob#0007");

        let recipient = relay_video(
            &messenger,
            VideoTarget::ById("7".to_string()),
            "http://x/y.mp4",
            None,
        )
        .await
        .unwrap();

        assert_eq!(recipient.tag, "bob#0007");
        assert_eq!(messenger.sent()[0].user_id, 7);
    }

    #[tokio::test]
    async fn test_relay_by_unknown_id_is_not_found() {
        let messenger = RecordingMessenger::new().with_user(7, "bob#0007");

        let unknown = relay_video(
            &messenger,
            VideoTarget::ById("8".to_string()),
            "http://x/y.mp4",
            None,
        )
        .await;
        assert!(matches!(unknown, Err(DeliveryError::UserNotFound(_))));

        let malformed = relay_video(
            &messenger,
            VideoTarget::ById("not-an-id".to_string()),
            "http://x/y.mp4",
            None,
        )
        .await;
        assert!(matches!(malformed, Err(DeliveryError::UserNotFound(_))));
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_relay_to_blocked_user() {
        let messenger = RecordingMessenger::new().with_blocked_user(42, "alice#0001");

        let result = relay_video(
            &messenger,
            VideoTarget::Resolved(alice()),
            "http://x/y.mp4",
            None,
        )
        .await;

        assert!(matches!(result, Err(DeliveryError::DmBlocked(_))));
    }
}
