//! # Delivery Feature
//!
//! Direct-message sending to Discord users: recipient lookup, text DMs and
//! DMs with a local file attached.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod content;
pub mod messenger;
pub mod relay;

#[cfg(test)]
pub(crate) mod testing;

pub use content::compose_video_message;
pub use messenger::{DirectMessenger, Recipient};
pub use relay::{parse_user_id, relay_video, VideoTarget};
