//! Notification store and its background poller.
//!
//! The store is shared between the UI and the poller task, so unlike the
//! other stores it keeps its state behind a mutex and hands out snapshots.
//! Read actions (mark-read) apply locally even when the backend call fails,
//! so the badge never sticks.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use gridlog_client::ApiClient;
use gridlog_core::{ListPayload, Notification};

/// Whether the app is in the foreground. Polling pauses while hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Channel the UI shell drives as the window gains and loses focus.
#[must_use]
pub fn visibility_channel() -> (watch::Sender<Visibility>, watch::Receiver<Visibility>) {
    watch::channel(Visibility::Visible)
}

#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub last_fetched: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct NotificationsStore {
    client: ApiClient,
    state: Arc<Mutex<NotificationsState>>,
}

impl NotificationsStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(NotificationsState::default())),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> NotificationsState {
        self.lock().clone()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.lock().unread_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NotificationsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Refresh the list. A failed fetch degrades to an empty list with the
    /// error recorded, rather than leaving stale entries on screen.
    pub async fn fetch(&self) {
        self.lock().loading = true;

        let outcome = self
            .client
            .get::<ListPayload<Notification>>("/notifications/")
            .await;

        let mut state = self.lock();
        state.loading = false;
        state.last_fetched = Some(Utc::now());
        match outcome {
            Ok(payload) => {
                state.notifications = payload.into_parts().0;
                state.error = None;
            }
            Err(error) => {
                tracing::debug!(%error, "notification fetch failed");
                state.notifications = Vec::new();
                state.error = Some(error.user_message());
            }
        }
        state.unread_count = state.notifications.iter().filter(|n| !n.is_read).count();
    }

    /// Mark one notification read. The local record flips even if the
    /// backend call fails; the next successful fetch reconciles.
    pub async fn mark_read(&self, id: i64) {
        if let Err(error) = self
            .client
            .post_discard("/notifications/mark-read/", &serde_json::json!({ "ids": [id] }))
            .await
        {
            tracing::debug!(%error, id, "mark-read failed; applying locally");
        }

        let mut state = self.lock();
        if let Some(notification) = state.notifications.iter_mut().find(|n| n.id == id) {
            notification.is_read = true;
        }
        state.unread_count = state.notifications.iter().filter(|n| !n.is_read).count();
    }

    /// Mark everything read.
    pub async fn mark_all_read(&self) {
        if let Err(error) = self
            .client
            .post_discard("/notifications/mark-all-read/", &serde_json::json!({}))
            .await
        {
            tracing::debug!(%error, "mark-all-read failed; applying locally");
        }

        let mut state = self.lock();
        for notification in &mut state.notifications {
            notification.is_read = true;
        }
        state.unread_count = 0;
    }

}

/// Background task that refreshes the store on an interval while the app is
/// visible. The interval and the visibility subscription live and die with
/// the task; stopping it tears both down.
pub struct NotificationPoller {
    handle: JoinHandle<()>,
}

impl NotificationPoller {
    /// Spawn the poll loop. Fetches immediately when visible, then on each
    /// tick while visible, and once more on each hidden-to-visible
    /// transition. Exits when the visibility sender is dropped.
    #[must_use]
    pub fn spawn(
        store: NotificationsStore,
        every: Duration,
        mut visibility: watch::Receiver<Visibility>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            if *visibility.borrow() == Visibility::Visible {
                store.fetch().await;
            }

            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick completes immediately; the fetch above covers it.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let visible = *visibility.borrow() == Visibility::Visible;
                        if visible {
                            store.fetch().await;
                        }
                    }
                    changed = visibility.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let visible = *visibility.borrow_and_update() == Visibility::Visible;
                        if visible {
                            store.fetch().await;
                            ticker.reset();
                        }
                    }
                }
            }
        });
        Self { handle }
    }

    /// Stop polling. Dropping the poller has the same effect.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
