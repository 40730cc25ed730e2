//! Environment-driven configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Token, guild, log level and reminder settings

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default reminder period: four hours
pub const DEFAULT_REMINDER_INTERVAL_SECS: u64 = 4 * 60 * 60;
pub const DEFAULT_REMINDER_MESSAGE: &str = "4 Hourly reminder to grind";
pub const DEFAULT_REMINDER_ATTACHMENT: &str = "./sadness.mp4";
/// Longest accepted reminder period: one year
pub const MAX_REMINDER_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_guild_id: Option<String>,
    pub log_level: String,
    pub reminder: ReminderSettings,
}

/// What a repeating reminder sends and how often
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSettings {
    pub interval: Duration,
    pub message: String,
    pub attachment_path: PathBuf,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_REMINDER_INTERVAL_SECS),
            message: DEFAULT_REMINDER_MESSAGE.to_string(),
            attachment_path: PathBuf::from(DEFAULT_REMINDER_ATTACHMENT),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DISCORD_TOKEN environment variable not set"))?;

        let interval = match lookup("REMINDER_INTERVAL_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    anyhow::anyhow!("REMINDER_INTERVAL_SECS must be a whole number of seconds: {e}")
                })?;
                if secs == 0 {
                    anyhow::bail!("REMINDER_INTERVAL_SECS must be greater than zero");
                }
                if secs > MAX_REMINDER_INTERVAL_SECS {
                    anyhow::bail!(
                        "REMINDER_INTERVAL_SECS must be at most {MAX_REMINDER_INTERVAL_SECS} (one year)"
                    );
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_REMINDER_INTERVAL_SECS),
        };

        Ok(Config {
            discord_token,
            discord_guild_id: lookup("DISCORD_GUILD_ID").filter(|id| !id.is_empty()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            reminder: ReminderSettings {
                interval,
                message: lookup("REMINDER_MESSAGE")
                    .unwrap_or_else(|| DEFAULT_REMINDER_MESSAGE.to_string()),
                attachment_path: lookup("REMINDER_ATTACHMENT_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_REMINDER_ATTACHMENT)),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_missing_token() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_blank_token_rejected() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_with_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "test_token")])).unwrap();
        assert_eq!(config.discord_token, "test_token");
        assert_eq!(config.discord_guild_id, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.reminder, ReminderSettings::default());
        assert_eq!(config.reminder.interval, Duration::from_secs(14_400));
        assert_eq!(config.reminder.message, "4 Hourly reminder to grind");
        assert_eq!(config.reminder.attachment_path, PathBuf::from("./sadness.mp4"));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "t"),
            ("DISCORD_GUILD_ID", "1234"),
            ("LOG_LEVEL", "debug"),
            ("REMINDER_INTERVAL_SECS", "60"),
            ("REMINDER_MESSAGE", "stretch"),
            ("REMINDER_ATTACHMENT_PATH", "/tmp/clip.mp4"),
        ]))
        .unwrap();

        assert_eq!(config.discord_guild_id.as_deref(), Some("1234"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.reminder.interval, Duration::from_secs(60));
        assert_eq!(config.reminder.message, "stretch");
        assert_eq!(config.reminder.attachment_path, PathBuf::from("/tmp/clip.mp4"));
    }

    #[test]
    fn test_config_rejects_bad_interval() {
        let zero = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "t"),
            ("REMINDER_INTERVAL_SECS", "0"),
        ]));
        assert!(zero.is_err());

        let garbage = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "t"),
            ("REMINDER_INTERVAL_SECS", "4h"),
        ]));
        assert!(garbage.is_err());
    }

    #[test]
    fn test_config_rejects_oversized_interval() {
        let huge = u64::MAX.to_string();
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "t"),
            ("REMINDER_INTERVAL_SECS", huge.as_str()),
        ]));
        assert!(result.is_err());

        let just_over = (MAX_REMINDER_INTERVAL_SECS + 1).to_string();
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "t"),
            ("REMINDER_INTERVAL_SECS", just_over.as_str()),
        ]));
        assert!(result.is_err());

        let at_limit = MAX_REMINDER_INTERVAL_SECS.to_string();
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "t"),
            ("REMINDER_INTERVAL_SECS", at_limit.as_str()),
        ]))
        .unwrap();
        assert_eq!(
            config.reminder.interval,
            Duration::from_secs(MAX_REMINDER_INTERVAL_SECS)
        );
    }
}
