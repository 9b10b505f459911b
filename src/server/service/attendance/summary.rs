//! Attendance summary: the dashboard's service.
//!
//! The second call site of the session engine. Live dashboards open a session the
//! same way the marking screen does; point-in-time reports aggregate per-unit
//! counts straight from the record store.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::attendance::{AttendanceSummaryDto, UnitCountDto},
    server::{
        data::{
            attendance::AttendanceRepository, member::MemberRepository,
            org::OrgUnitRepository, project::EventRepository,
            registration::RegistrationRepository,
        },
        error::{attendance::AttendanceError, Error},
        feed::{AttendanceFeed, FeedSubscription},
        service::attendance::session::AttendanceSession,
    },
};

pub struct AttendanceSummaryService<'a> {
    db: &'a DatabaseConnection,
    feed: &'a AttendanceFeed,
}

impl<'a> AttendanceSummaryService<'a> {
    /// Creates a new instance of [`AttendanceSummaryService`]
    pub fn new(db: &'a DatabaseConnection, feed: &'a AttendanceFeed) -> Self {
        Self { db, feed }
    }

    /// Opens a live session for a dashboard, subscription first, then bulk load.
    pub async fn open_live(
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

    /// The event flagged for the dashboard, if any.
    pub async fn primary_event(&self) -> Result<Option<entity::project_event::Model>, Error> {
        let event_repo = EventRepository::new(self.db);

        Ok(event_repo.get_primary().await?)
    }

    /// Point-in-time per-unit attendance counts for an event.
    pub async fn summarize(&self, event_id: i32) -> Result<AttendanceSummaryDto, Error> {
        let event_repo = EventRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);
        let attendance_repo = AttendanceRepository::new(self.db);
        let unit_repo = OrgUnitRepository::new(self.db);

        let event = event_repo
            .get(event_id)
            .await?
            .ok_or(AttendanceError::EventNotFound(event_id))?;

        let registrations = registration_repo.list_by_project(event.project_id).await?;
        let records = attendance_repo.list_by_event(event_id).await?;

        // Unit placement for every member involved, registered or present.
        let mut member_ids: Vec<i32> = registrations.iter().map(|r| r.member_id).collect();
        member_ids.extend(records.iter().map(|r| r.member_id));
        member_ids.sort_unstable();
        member_ids.dedup();

        let unit_by_member: HashMap<i32, i32> = member_repo
            .list_by_ids(member_ids)
            .await?
            .into_iter()
            .filter_map(|(member, unit)| unit.map(|u| (member.id, u.id)))
            .collect();

        let mut registered_by_unit: HashMap<i32, u64> = HashMap::new();
        for registration in &registrations {
            if let Some(unit_id) = unit_by_member.get(&registration.member_id) {
                *registered_by_unit.entry(*unit_id).or_default() += 1;
            }
        }

        let mut present_by_unit: HashMap<i32, u64> = HashMap::new();
        for record in &records {
            if let Some(unit_id) = unit_by_member.get(&record.member_id) {
                *present_by_unit.entry(*unit_id).or_default() += 1;
            }
        }

        let mut units: Vec<UnitCountDto> = unit_repo
            .list()
            .await?
            .into_iter()
            .filter_map(|unit| {
                let registered = registered_by_unit.get(&unit.id).copied().unwrap_or(0);
                let present = present_by_unit.get(&unit.id).copied().unwrap_or(0);

                (registered > 0 || present > 0).then_some(UnitCountDto {
                    unit_id: unit.id,
                    unit_name: unit.name,
                    present,
                    registered,
                })
            })
            .collect();
        units.sort_by_key(|u| u.unit_id);

        Ok(AttendanceSummaryDto {
            event_id,
            total_present: records.len() as u64,
            total_registered: registrations.len() as u64,
            units,
        })
    }
}
