//! Live attendance session for one opened event view.
//!
//! A session owns the presence ledger for a single event and reconciles three input
//! streams: the initial bulk load, change-feed notifications from other clients, and
//! optimistic local toggles. All mutations are applied in the order their triggering
//! events are processed; there is no parallelism inside a session.
//!
//! Lifecycle: `Uninitialized -> Loading -> Ready -> Closed`. A ready session may be
//! reloaded in place (refresh, retry after a failed load) without leaving `Ready`.
//! `Closed` is terminal; reopening a view constructs a new session.

use std::time::Duration;

use chrono::Utc;

use crate::server::{
    data::attendance::AttendanceRepository,
    error::{attendance::AttendanceError, Error},
    feed::AttendanceChange,
    service::attendance::ledger::{PresenceEntry, PresenceLedger},
};

/// Upper bound on the initial bulk fetch before it is reported as a recoverable
/// timeout.
static LOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready,
    Closed,
}

/// A single presence change produced by folding a notification into the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenceDelta {
    pub member_id: i32,
    pub present: bool,
}

/// An optimistic toggle that has been applied locally but whose backing mutation
/// has not resolved yet.
#[derive(Clone, Copy, Debug)]
pub struct PendingToggle {
    pub member_id: i32,
    pub kind: ToggleKind,
}

#[derive(Clone, Copy, Debug)]
pub enum ToggleKind {
    Mark,
    Unmark(PresenceEntry),
}

pub struct AttendanceSession {
    event_id: i32,
    state: SessionState,
    ledger: PresenceLedger,
}

impl AttendanceSession {
    pub fn new(event_id: i32) -> Self {
        Self {
            event_id,
            state: SessionState::Uninitialized,
            ledger: PresenceLedger::new(),
        }
    }

    pub fn event_id(&self) -> i32 {
        self.event_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ledger(&self) -> &PresenceLedger {
        &self.ledger
    }

    /// Fetches all attendance records for the event and swaps in a freshly built
    /// ledger.
    ///
    /// The new ledger is assembled off to the side and installed only on success,
    /// so readers never observe a partially built state. On failure the previous
    /// ledger is left untouched and the caller may retry.
    pub async fn load_initial(&mut self, repo: &AttendanceRepository<'_>) -> Result<(), Error> {
        match self.state {
            SessionState::Closed => {
                return Err(AttendanceError::SessionClosed(self.event_id).into());
            }
            SessionState::Uninitialized => self.state = SessionState::Loading,
            // A refresh from Ready stays Ready; a concurrent re-entry while
            // Loading just runs the fetch again.
            SessionState::Loading | SessionState::Ready => {}
        }

        let fetch = tokio::time::timeout(LOAD_TIMEOUT, repo.list_by_event(self.event_id)).await;

        let records = match fetch {
            Ok(Ok(records)) => records,
            Ok(Err(err)) => {
                if self.state == SessionState::Loading {
                    self.state = SessionState::Uninitialized;
                }
                return Err(err.into());
            }
            Err(_) => {
                if self.state == SessionState::Loading {
                    self.state = SessionState::Uninitialized;
                }
                return Err(AttendanceError::LoadTimedOut(self.event_id).into());
            }
        };

        self.ledger = PresenceLedger::from_records(&records);
        self.state = SessionState::Ready;

        Ok(())
    }

    /// Folds one change-feed notification into the ledger.
    ///
    /// Notifications for other events, duplicates of known records, and deletes for
    /// records this session never tracked are all dropped without effect. A closed
    /// or not-yet-ready session discards everything, so a notification resolving
    /// after teardown cannot mutate a dead view.
    pub fn apply_change(&mut self, change: &AttendanceChange) -> Option<PresenceDelta> {
        if self.state != SessionState::Ready {
            return None;
        }

        match change {
            AttendanceChange::Inserted { record } => {
                if record.event_id != self.event_id {
                    return None;
                }

                self.ledger
                    .apply_insert(record.id, record.member_id, record.marked_at)
                    .then_some(PresenceDelta {
                        member_id: record.member_id,
                        present: true,
                    })
            }
            AttendanceChange::Deleted { record_id } => {
                self.ledger
                    .apply_delete(*record_id)
                    .map(|member_id| PresenceDelta {
                        member_id,
                        present: false,
                    })
            }
        }
    }

    /// Flips a member's presence locally, before the backing mutation resolves.
    ///
    /// Returns the pending toggle the caller must settle with [`Self::commit_mark`]
    /// (marks) or [`Self::rollback`] (any failed mutation). Unmarks need no commit;
    /// the entry is already gone.
    pub fn begin_toggle(&mut self, member_id: i32) -> Result<PendingToggle, AttendanceError> {
        if self.state != SessionState::Ready {
            return Err(AttendanceError::SessionClosed(self.event_id));
        }

        if let Some(entry) = self.ledger.remove_member(member_id) {
            return Ok(PendingToggle {
                member_id,
                kind: ToggleKind::Unmark(entry),
            });
        }

        self.ledger.mark_pending(member_id, Utc::now().naive_utc());

        Ok(PendingToggle {
            member_id,
            kind: ToggleKind::Mark,
        })
    }

    /// Confirms a pending mark with the server-assigned record.
    pub fn commit_mark(&mut self, record: &entity::attendance_record::Model) {
        if self.state != SessionState::Ready {
            return;
        }

        self.ledger
            .apply_insert(record.id, record.member_id, record.marked_at);
    }

    /// Rolls back a failed toggle by applying the inverse of the original flip to
    /// the current state.
    ///
    /// A failed mark clears the member's entry only while it is still pending; if a
    /// remote insert confirmed the member in the meantime, that newer state wins. A
    /// failed unmark reinstates the removed entry unless the member has since been
    /// re-marked. Neither path blindly restores a captured snapshot.
    pub fn rollback(&mut self, pending: PendingToggle) {
        if self.state != SessionState::Ready {
            return;
        }

        match pending.kind {
            ToggleKind::Mark => {
                self.ledger.clear_pending(pending.member_id);
            }
            ToggleKind::Unmark(entry) => {
                self.ledger.restore(pending.member_id, entry);
            }
        }
    }

    /// Closes the session. Terminal and idempotent; all later notifications and
    /// toggles are discarded.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }
}
