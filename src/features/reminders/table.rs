//! Per-user repeating reminder tasks
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Abort tasks that outlive the cancellation grace period
//! - 1.0.0: DashMap-backed table of cancellable interval tasks

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::core::{DeliveryError, ReminderSettings, MAX_REMINDER_INTERVAL_SECS};
use crate::features::delivery::DirectMessenger;

/// How long a cancelled task may keep running (a firing in flight) before it is aborted
pub const CANCEL_GRACE: Duration = Duration::from_secs(30);

/// A live reminder schedule
struct ReminderEntry {
    started_at: DateTime<Utc>,
    deliveries: Arc<AtomicU64>,
    // Sending (or dropping) this stops the task before its next firing
    cancel: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ReminderEntry {
    fn cancel(self, user_id: u64) -> StoppedReminder {
        let _ = self.cancel.send(());
        tokio::spawn(reap(user_id, self.task, CANCEL_GRACE));
        StoppedReminder {
            started_at: self.started_at,
            deliveries: self.deliveries.load(Ordering::Relaxed),
        }
    }
}

/// Wait up to `grace` for a cancelled task to end, then abort it
///
/// Returns `true` when the task ended on its own.
async fn reap(user_id: u64, mut task: JoinHandle<()>, grace: Duration) -> bool {
    match tokio::time::timeout(grace, &mut task).await {
        Ok(_) => true,
        Err(_) => {
            warn!("⚠️ Reminder task for user {user_id} still busy after cancel, aborting");
            task.abort();
            false
        }
    }
}

/// Result of registering a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartedReminder {
    /// An earlier schedule for the same user was cancelled
    pub replaced: bool,
}

/// A schedule that was just cancelled
#[derive(Debug, Clone, Copy)]
pub struct StoppedReminder {
    pub started_at: DateTime<Utc>,
    /// Firings that reached the user
    pub deliveries: u64,
}

/// User id → active reminder schedule
///
/// Owned by the command context and shared by every handler. Replacing an
/// entry cancels the one it displaces inside the same map operation, so two
/// concurrent starts for one user still leave a single live schedule.
#[derive(Default)]
pub struct ReminderTable {
    entries: DashMap<u64, ReminderEntry>,
}

impl ReminderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a repeating reminder for `user_id`, cancelling any previous one
    ///
    /// The first firing happens one full interval from now. The interval is
    /// held between one second and one year. Must be called from inside a
    /// tokio runtime.
    pub fn start(
        &self,
        user_id: u64,
        messenger: Arc<dyn DirectMessenger>,
        settings: ReminderSettings,
    ) -> StartedReminder {
        let deliveries = Arc::new(AtomicU64::new(0));
        let (cancel, mut cancelled) = oneshot::channel::<()>();
        let period = settings.interval.clamp(
            Duration::from_secs(1),
            Duration::from_secs(MAX_REMINDER_INTERVAL_SECS),
        );
        let counter = Arc::clone(&deliveries);

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut cancelled => {
                        debug!("⏹️ Reminder loop for {user_id} cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        match deliver_reminder(&*messenger, user_id, &settings).await {
                            Ok(()) => {
                                let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
                                info!("⏰ Delivered reminder #{n} to user {user_id}");
                            }
                            Err(e) => {
                                warn!("⚠️ Reminder to user {user_id} failed, keeping schedule: {e}");
                            }
                        }
                    }
                }
            }
        });

        let entry = ReminderEntry {
            started_at: Utc::now(),
            deliveries,
            cancel,
            task,
        };

        let replaced = match self.entries.insert(user_id, entry) {
            Some(previous) => {
                previous.cancel(user_id);
                true
            }
            None => false,
        };

        info!(
            "⏰ Reminder schedule {} for user {user_id} every {}s",
            if replaced { "replaced" } else { "started" },
            period.as_secs()
        );

        StartedReminder { replaced }
    }

    /// Cancel and remove the schedule for `user_id`, if there is one
    pub fn stop(&self, user_id: u64) -> Option<StoppedReminder> {
        let (_, entry) = self.entries.remove(&user_id)?;
        info!("⏹️ Reminder schedule stopped for user {user_id}");
        Some(entry.cancel(user_id))
    }

    pub fn is_active(&self, user_id: u64) -> bool {
        self.entries.contains_key(&user_id)
    }

    /// Number of users with a live schedule
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Send one reminder firing
///
/// A missing attachment fails this firing only; the caller keeps the schedule.
pub async fn deliver_reminder(
    messenger: &dyn DirectMessenger,
    user_id: u64,
    settings: &ReminderSettings,
) -> Result<(), DeliveryError> {
    let present = tokio::fs::metadata(&settings.attachment_path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !present {
        return Err(DeliveryError::MissingAttachment(
            settings.attachment_path.clone(),
        ));
    }

    messenger
        .send_with_attachment(user_id, &settings.message, &settings.attachment_path)
        .await
}
