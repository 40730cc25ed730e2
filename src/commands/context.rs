//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use crate::core::ReminderSettings;
use crate::features::reminders::ReminderTable;

/// Services every handler can reach
///
/// Built once in `main` and handed to the dispatcher; nothing here is global.
#[derive(Clone)]
pub struct CommandContext {
    pub reminders: Arc<ReminderTable>,
    pub reminder_settings: ReminderSettings,
}

impl CommandContext {
    pub fn new(reminder_settings: ReminderSettings) -> Self {
        Self {
            reminders: Arc::new(ReminderTable::new()),
            reminder_settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_reminder_table() {
        let ctx = CommandContext::new(ReminderSettings::default());
        let other = ctx.clone();
        assert!(Arc::ptr_eq(&ctx.reminders, &other.reminders));
    }
}
