use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260110_000003_member::Member, m20260110_000007_project_event::ProjectEvent};

static IDX_ATTENDANCE_RECORD_UNIQUE: &str = "idx_attendance_record_event_id_member_id";
static IDX_ATTENDANCE_RECORD_EVENT_ID: &str = "idx_attendance_record_event_id";
static FK_ATTENDANCE_RECORD_EVENT_ID: &str = "fk_attendance_record_event_id";
static FK_ATTENDANCE_RECORD_MEMBER_ID: &str = "fk_attendance_record_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(AttendanceRecord::Id))
                    .col(integer(AttendanceRecord::EventId))
                    .col(integer(AttendanceRecord::MemberId))
                    .col(timestamp(AttendanceRecord::MarkedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTENDANCE_RECORD_EVENT_ID)
                    .table(AttendanceRecord::Table)
                    .col(AttendanceRecord::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTENDANCE_RECORD_UNIQUE)
                    .table(AttendanceRecord::Table)
                    .col(AttendanceRecord::EventId)
                    .col(AttendanceRecord::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTENDANCE_RECORD_EVENT_ID)
                    .from_tbl(AttendanceRecord::Table)
                    .from_col(AttendanceRecord::EventId)
                    .to_tbl(ProjectEvent::Table)
                    .to_col(ProjectEvent::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTENDANCE_RECORD_MEMBER_ID)
                    .from_tbl(AttendanceRecord::Table)
                    .from_col(AttendanceRecord::MemberId)
                    .to_tbl(Member::Table)
                    .to_col(Member::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTENDANCE_RECORD_MEMBER_ID)
                    .table(AttendanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTENDANCE_RECORD_EVENT_ID)
                    .table(AttendanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTENDANCE_RECORD_UNIQUE)
                    .table(AttendanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTENDANCE_RECORD_EVENT_ID)
                    .table(AttendanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AttendanceRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AttendanceRecord {
    Table,
    Id,
    EventId,
    MemberId,
    MarkedAt,
}
