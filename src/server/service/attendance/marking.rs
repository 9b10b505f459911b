//! Attendance marking: the check-in screen's service.
//!
//! Wraps the session engine with the record-store mutations and change-feed
//! publications that back optimistic toggles, badge check-in, and the scope-filtered
//! roster.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::attendance::RosterEntryDto,
    server::{
        data::{
            attendance::AttendanceRepository, member::MemberRepository,
            project::EventRepository, registration::RegistrationRepository,
        },
        error::{attendance::AttendanceError, Error},
        feed::{AttendanceChange, AttendanceFeed, FeedSubscription},
        model::role::ViewerScope,
        service::{
            attendance::session::{AttendanceSession, ToggleKind},
            roster::{visible_roster, RosterRow},
        },
    },
};

pub struct AttendanceMarkingService<'a> {
    db: &'a DatabaseConnection,
    feed: &'a AttendanceFeed,
}

impl<'a> AttendanceMarkingService<'a> {
    /// Creates a new instance of [`AttendanceMarkingService`]
    pub fn new(db: &'a DatabaseConnection, feed: &'a AttendanceFeed) -> Self {
        Self { db, feed }
    }

    /// Opens a live session for an event.
    ///
    /// The subscription is opened before the bulk load so no notification falls
    /// between fetch and subscribe; the session's idempotent inserts absorb the
    /// overlap.
    pub async fn open_session(
        &self,
        event_id: i32,
    ) -> Result<(AttendanceSession, FeedSubscription), Error> {
        let event_repo = EventRepository::new(self.db);

        if event_repo.get(event_id).await?.is_none() {
            return Err(AttendanceError::EventNotFound(event_id).into());
        }

        let subscription = self.feed.subscribe();

        let mut session = AttendanceSession::new(event_id);
        let attendance_repo = AttendanceRepository::new(self.db);
        session.load_initial(&attendance_repo).await?;

        Ok((session, subscription))
    }

    /// Optimistically flips a member's presence and issues the backing mutation.
    ///
    /// Returns the member's presence after the toggle. On mutation failure the
    /// local flip is rolled back (inverse flip against current state) and the
    /// caller receives a retryable [`AttendanceError::SyncFailed`].
    pub async fn toggle_presence(
        &self,
        session: &mut AttendanceSession,
        member_id: i32,
    ) -> Result<bool, Error> {
        let attendance_repo = AttendanceRepository::new(self.db);
        let event_id = session.event_id();

        let pending = session.begin_toggle(member_id)?;

        match pending.kind {
            ToggleKind::Mark => match attendance_repo.insert(event_id, member_id).await {
                Ok(record) => {
                    session.commit_mark(&record);
                    self.feed.publish(AttendanceChange::Inserted { record });

                    Ok(true)
                }
                Err(err) => {
                    tracing::warn!(
                        event_id = %event_id,
                        member_id = %member_id,
                        error = %err,
                        "attendance mark failed, rolling back optimistic flip"
                    );
                    session.rollback(pending);

                    Err(AttendanceError::SyncFailed(member_id).into())
                }
            },
            ToggleKind::Unmark(entry) => {
                match attendance_repo
                    .delete_by_event_and_member(event_id, member_id)
                    .await
                {
                    Ok(_) => {
                        if let Some(record_id) = entry.record_id {
                            self.feed.publish(AttendanceChange::Deleted { record_id });
                        }

                        Ok(false)
                    }
                    Err(err) => {
                        tracing::warn!(
                            event_id = %event_id,
                            member_id = %member_id,
                            error = %err,
                            "attendance unmark failed, rolling back optimistic flip"
                        );
                        session.rollback(pending);

                        Err(AttendanceError::SyncFailed(member_id).into())
                    }
                }
            }
        }
    }

    /// Marks a member present from a scanned badge code.
    ///
    /// A badge already marked for this event is an idempotent success; scanning
    /// twice at the desk must not error. Returns the member ID and their presence.
    pub async fn check_in_by_badge(
        &self,
        event_id: i32,
        badge_code: &str,
    ) -> Result<(i32, bool), Error> {
        let event_repo = EventRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);
        let attendance_repo = AttendanceRepository::new(self.db);

        let event = event_repo
            .get(event_id)
            .await?
            .ok_or(AttendanceError::EventNotFound(event_id))?;

        let registration = registration_repo
            .find_by_badge_code(badge_code)
            .await?
            .ok_or_else(|| AttendanceError::UnknownBadge(badge_code.to_string()))?;

        // A badge issued for another project does not admit to this event.
        if registration.project_id != event.project_id {
            return Err(AttendanceError::UnknownBadge(badge_code.to_string()).into());
        }

        if attendance_repo
            .get_by_event_and_member(event_id, registration.member_id)
            .await?
            .is_some()
        {
            return Ok((registration.member_id, true));
        }

        let record = attendance_repo
            .insert(event_id, registration.member_id)
            .await?;
        let member_id = record.member_id;
        self.feed.publish(AttendanceChange::Inserted { record });

        Ok((member_id, true))
    }

    /// Builds the scope-filtered roster for an event with current presence flags.
    pub async fn roster_with_presence(
        &self,
        viewer: &ViewerScope,
        event_id: i32,
    ) -> Result<Vec<RosterEntryDto>, Error> {
        let event_repo = EventRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);
        let attendance_repo = AttendanceRepository::new(self.db);

        let event = event_repo
            .get(event_id)
            .await?
            .ok_or(AttendanceError::EventNotFound(event_id))?;

        let registrations = registration_repo.list_by_project(event.project_id).await?;
        let member_ids: Vec<i32> = registrations.iter().map(|r| r.member_id).collect();

        let rows: Vec<RosterRow> = member_repo
            .list_by_ids(member_ids)
            .await?
            .into_iter()
            .filter_map(|(member, unit)| RosterRow::from_member(member, unit))
            .collect();

        let presence: HashMap<i32, NaiveDateTime> = attendance_repo
            .list_by_event(event_id)
            .await?
            .into_iter()
            .map(|record| (record.member_id, record.marked_at))
            .collect();

        let roster = visible_roster(viewer, rows)
            .into_iter()
            .map(|row| {
                let marked_at = presence.get(&row.member_id).copied();

                RosterEntryDto {
                    member_id: row.member_id,
                    member_code: row.member_code,
                    first_name: row.first_name,
                    last_name: row.last_name,
                    unit_id: row.unit_id,
                    present: marked_at.is_some(),
                    marked_at,
                }
            })
            .collect();

        Ok(roster)
    }
}
