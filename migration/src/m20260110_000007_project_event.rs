use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000006_project::Project;

static IDX_PROJECT_EVENT_PROJECT_ID: &str = "idx_project_event_project_id";
static FK_PROJECT_EVENT_PROJECT_ID: &str = "fk_project_event_project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectEvent::Id))
                    .col(integer(ProjectEvent::ProjectId))
                    .col(string(ProjectEvent::Name))
                    .col(boolean(ProjectEvent::IsPrimary))
                    .col(timestamp(ProjectEvent::StartsAt))
                    .col(timestamp(ProjectEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECT_EVENT_PROJECT_ID)
                    .table(ProjectEvent::Table)
                    .col(ProjectEvent::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_EVENT_PROJECT_ID)
                    .from_tbl(ProjectEvent::Table)
                    .from_col(ProjectEvent::ProjectId)
                    .to_tbl(Project::Table)
                    .to_col(Project::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROJECT_EVENT_PROJECT_ID)
                    .table(ProjectEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECT_EVENT_PROJECT_ID)
                    .table(ProjectEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProjectEvent {
    Table,
    Id,
    ProjectId,
    Name,
    IsPrimary,
    StartsAt,
    CreatedAt,
}
