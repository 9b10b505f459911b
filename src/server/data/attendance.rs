use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

/// Repository over the attendance table, the only table the presence
/// reconciliation engine mutates.
pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    /// Creates a new instance of [`AttendanceRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bulk fetch backing a session's initial load.
    pub async fn list_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::attendance_record::Model>, DbErr> {
        entity::prelude::AttendanceRecord::find()
            .filter(entity::attendance_record::Column::EventId.eq(event_id))
            .all(self.db)
            .await
    }

    pub async fn get_by_event_and_member(
        &self,
        event_id: i32,
        member_id: i32,
    ) -> Result<Option<entity::attendance_record::Model>, DbErr> {
        entity::prelude::AttendanceRecord::find()
            .filter(entity::attendance_record::Column::EventId.eq(event_id))
            .filter(entity::attendance_record::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    pub async fn insert(
        &self,
        event_id: i32,
        member_id: i32,
    ) -> Result<entity::attendance_record::Model, DbErr> {
        let record = entity::attendance_record::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            member_id: ActiveValue::Set(member_id),
            marked_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Deletes the attendance record matching `{event_id, member_id}`.
    ///
    /// Returns OK regardless of the record existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete_by_event_and_member(
        &self,
        event_id: i32,
        member_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::AttendanceRecord::delete_many()
            .filter(entity::attendance_record::Column::EventId.eq(event_id))
            .filter(entity::attendance_record::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use keshav_test_utils::prelude::*;

    use crate::server::data::attendance::AttendanceRepository;

    /// Expect success when inserting an attendance record
    #[tokio::test]
    async fn test_insert_attendance_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_attendance_tables().build().await?;
        let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
        let member = test.org().insert_mock_member(1, unit.id).await?;
        let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

        let attendance_repo = AttendanceRepository::new(&test.db);
        let result = attendance_repo.insert(event.id, member.id).await;

        assert!(result.is_ok());
        let record = result.unwrap();
        assert_eq!(record.event_id, event.id);
        assert_eq!(record.member_id, member.id);

        Ok(())
    }

    /// Expect Error when inserting without required tables being created
    #[tokio::test]
    async fn test_insert_attendance_error() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let attendance_repo = AttendanceRepository::new(&test.db);

        let result = attendance_repo.insert(1, 1).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect listing by event to return only that event's records
    #[tokio::test]
    async fn test_list_by_event() -> Result<(), TestError> {
        let test = TestBuilder::new().with_attendance_tables().build().await?;
        let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
        let first = test.org().insert_mock_member(1, unit.id).await?;
        let second = test.org().insert_mock_member(2, unit.id).await?;
        let (project, event) = test.projects().insert_project_with_event("Winter Camp").await?;
        let other_event = test.projects().insert_event(project.id, "Day 2", false).await?;

        let attendance_repo = AttendanceRepository::new(&test.db);
        attendance_repo.insert(event.id, first.id).await?;
        attendance_repo.insert(event.id, second.id).await?;
        attendance_repo.insert(other_event.id, first.id).await?;

        let records = attendance_repo.list_by_event(event.id).await?;

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.event_id == event.id));

        Ok(())
    }

    /// Expect one row to be affected when deleting an existing record
    #[tokio::test]
    async fn test_delete_by_event_and_member_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_attendance_tables().build().await?;
        let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
        let member = test.org().insert_mock_member(1, unit.id).await?;
        let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

        let attendance_repo = AttendanceRepository::new(&test.db);
        attendance_repo.insert(event.id, member.id).await?;

        let result = attendance_repo
            .delete_by_event_and_member(event.id, member.id)
            .await?;

        assert_eq!(result.rows_affected, 1);

        let remaining = attendance_repo.list_by_event(event.id).await?;
        assert!(remaining.is_empty());

        Ok(())
    }

    /// Expect no rows to be affected when deleting a record that does not exist
    #[tokio::test]
    async fn test_delete_by_event_and_member_none() -> Result<(), TestError> {
        let test = TestBuilder::new().with_attendance_tables().build().await?;
        let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

        let attendance_repo = AttendanceRepository::new(&test.db);
        let result = attendance_repo
            .delete_by_event_and_member(event.id, 42)
            .await?;

        assert_eq!(result.rows_affected, 0);

        Ok(())
    }
}
