//! DM body composition

/// Build the DM body for a video relay.
///
/// A present, non-blank message goes on its own line above the URL, exactly as
/// typed; otherwise the body is the URL alone.
pub fn compose_video_message(video_url: &str, message: Option<&str>) -> String {
    match message.filter(|m| !m.trim().is_empty()) {
        Some(message) => format!("{message}\n{video_url}"),
        None => video_url.to_string(),
    }
}
