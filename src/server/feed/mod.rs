//! Attendance change feed.
//!
//! In-process publish/subscribe hub carrying row-level insert/delete notifications for
//! the attendance table. Services that mutate attendance publish here; live views
//! (marking screen, summary dashboard, SSE streams) subscribe. Delivery is
//! at-least-once from the consumer's perspective: a lagging receiver drops to the
//! oldest retained notification and continues, so consumers must apply notifications
//! idempotently. Insert notifications carry the full new row; delete notifications
//! carry only the deleted record's ID, as the row is already gone.

use tokio::sync::broadcast;

/// Notifications retained per subscription before a slow consumer starts lagging.
static FEED_CAPACITY: usize = 256;

/// A single row-level change to the attendance table.
#[derive(Clone, Debug)]
pub enum AttendanceChange {
    Inserted {
        record: entity::attendance_record::Model,
    },
    Deleted {
        record_id: i32,
    },
}

/// Publish/subscribe hub for [`AttendanceChange`] notifications.
///
/// Cheap to clone; all clones share one channel. Constructed once at startup and
/// injected through `AppState`.
#[derive(Clone)]
pub struct AttendanceFeed {
    tx: broadcast::Sender<AttendanceChange>,
}

impl AttendanceFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(FEED_CAPACITY);
        Self { tx }
    }

    /// Publishes a change to all open subscriptions.
    ///
    /// A send with no live subscribers is not an error; the notification is simply
    /// not retained.
    pub fn publish(&self, change: AttendanceChange) {
        if self.tx.send(change).is_err() {
            tracing::trace!("attendance change published with no live subscribers");
        }
    }

    /// Opens a new subscription receiving every change published after this call.
    pub fn subscribe(&self) -> FeedSubscription {
        FeedSubscription {
            rx: Some(self.tx.subscribe()),
        }
    }

    /// Number of currently open subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AttendanceFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one open change-feed subscription.
///
/// Dropping the handle or calling [`FeedSubscription::close`] stops delivery and
/// releases the channel slot. `close` is idempotent.
pub struct FeedSubscription {
    rx: Option<broadcast::Receiver<AttendanceChange>>,
}

impl FeedSubscription {
    /// Waits for the next change.
    ///
    /// Returns `None` once the subscription is closed, either locally via
    /// [`FeedSubscription::close`] or because the hub was dropped. A lagged receiver
    /// logs and continues from the oldest retained notification rather than failing.
    pub async fn next(&mut self) -> Option<AttendanceChange> {
        let rx = self.rx.as_mut()?;

        loop {
            match rx.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        skipped = %skipped,
                        "attendance feed subscription lagged, continuing from oldest retained notification"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    self.rx = None;
                    return None;
                }
            }
        }
    }

    /// Returns the next change if one is already queued, without waiting.
    pub fn try_next(&mut self) -> Option<AttendanceChange> {
        let rx = self.rx.as_mut()?;

        loop {
            match rx.try_recv() {
                Ok(change) => return Some(change),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        skipped = %skipped,
                        "attendance feed subscription lagged, continuing from oldest retained notification"
                    );
                }
                Err(broadcast::error::TryRecvError::Empty) => return None,
                Err(broadcast::error::TryRecvError::Closed) => {
                    self.rx = None;
                    return None;
                }
            }
        }
    }

    /// Stops delivery and releases resources. Safe to call multiple times.
    pub fn close(&mut self) {
        self.rx = None;
    }

    pub fn is_closed(&self) -> bool {
        self.rx.is_none()
    }
}
