//! In-memory presence bookkeeping for one event.
//!
//! The ledger pairs two maps: member ID to presence entry, and attendance-record ID
//! back to member ID. The reverse map exists because delete notifications identify the
//! deleted row only by its own ID; by the time the notification arrives the row is
//! gone. Both maps are created and deleted together for every confirmed entry.
//!
//! Entries start out *pending* (no record ID) when created by an optimistic local
//! mark, and are confirmed once the backing insert resolves or the corresponding
//! remote notification arrives.

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// One member's presence for the current event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenceEntry {
    pub marked_at: NaiveDateTime,
    /// Backing attendance record, `None` while an optimistic mark is in flight.
    pub record_id: Option<i32>,
}

/// Presence map plus reverse record index for one event view.
///
/// Owned exclusively by one [`super::session::AttendanceSession`]; never shared
/// across concurrently open views.
#[derive(Default)]
pub struct PresenceLedger {
    present: HashMap<i32, PresenceEntry>,
    record_owner: HashMap<i32, i32>,
}

impl PresenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from a bulk fetch of attendance records.
    pub fn from_records(records: &[entity::attendance_record::Model]) -> Self {
        let mut ledger = Self::new();
        for record in records {
            ledger.apply_insert(record.id, record.member_id, record.marked_at);
        }
        ledger
    }

    /// Applies an insert for a record, idempotently.
    ///
    /// A record ID that is already tracked is a no-op, so duplicate notifications
    /// and an insert already reflected by the initial fetch are both harmless.
    /// Returns whether the insert changed the ledger.
    pub fn apply_insert(&mut self, record_id: i32, member_id: i32, marked_at: NaiveDateTime) -> bool {
        if self.record_owner.contains_key(&record_id) {
            return false;
        }

        // A member re-marked under a fresh record drops the stale index entry so
        // the two maps stay paired.
        if let Some(existing) = self.present.get(&member_id) {
            if let Some(stale_record_id) = existing.record_id {
                self.record_owner.remove(&stale_record_id);
            }
        }

        self.record_owner.insert(record_id, member_id);
        self.present.insert(
            member_id,
            PresenceEntry {
                marked_at,
                record_id: Some(record_id),
            },
        );

        true
    }

    /// Applies a delete identified only by record ID.
    ///
    /// Returns the member whose presence was removed. A record ID this ledger never
    /// tracked is silently dropped; that is an expected race (the record was
    /// inserted and deleted before this view learned of it), not an error.
    pub fn apply_delete(&mut self, record_id: i32) -> Option<i32> {
        let member_id = self.record_owner.remove(&record_id)?;

        match self.present.get(&member_id) {
            Some(entry) if entry.record_id == Some(record_id) => {
                self.present.remove(&member_id);
                Some(member_id)
            }
            // The member's entry is backed by a different record (or pending);
            // only the index mapping is dropped.
            _ => None,
        }
    }

    /// Creates a pending entry for an optimistic local mark.
    ///
    /// Returns false if the member is already present.
    pub fn mark_pending(&mut self, member_id: i32, marked_at: NaiveDateTime) -> bool {
        if self.present.contains_key(&member_id) {
            return false;
        }

        self.present.insert(
            member_id,
            PresenceEntry {
                marked_at,
                record_id: None,
            },
        );

        true
    }

    /// Removes a member's entry and its index mapping, for an optimistic unmark.
    pub fn remove_member(&mut self, member_id: i32) -> Option<PresenceEntry> {
        let entry = self.present.remove(&member_id)?;

        if let Some(record_id) = entry.record_id {
            self.record_owner.remove(&record_id);
        }

        Some(entry)
    }

    /// Drops a member's entry only while it is still pending.
    ///
    /// Used to roll back a failed mark: if a remote insert confirmed the member in
    /// the meantime, the confirmed entry is kept.
    pub fn clear_pending(&mut self, member_id: i32) -> bool {
        match self.present.get(&member_id) {
            Some(entry) if entry.record_id.is_none() => {
                self.present.remove(&member_id);
                true
            }
            _ => false,
        }
    }

    /// Reinstates an entry removed by an optimistic unmark, unless the member has
    /// since been re-marked.
    ///
    /// Used to roll back a failed unmark: the inverse of the original flip is
    /// applied to the current state rather than blindly restoring a snapshot.
    pub fn restore(&mut self, member_id: i32, entry: PresenceEntry) -> bool {
        if self.present.contains_key(&member_id) {
            return false;
        }

        if let Some(record_id) = entry.record_id {
            self.record_owner.insert(record_id, member_id);
        }
        self.present.insert(member_id, entry);

        true
    }

    pub fn is_present(&self, member_id: i32) -> bool {
        self.present.contains_key(&member_id)
    }

    pub fn get(&self, member_id: i32) -> Option<&PresenceEntry> {
        self.present.get(&member_id)
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&i32, &PresenceEntry)> {
        self.present.iter()
    }

    /// Number of record-index entries; equals the number of confirmed presence
    /// entries whenever the pairing invariant holds.
    pub fn record_index_len(&self) -> usize {
        self.record_owner.len()
    }
}
