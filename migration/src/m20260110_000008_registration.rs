use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260110_000003_member::Member, m20260110_000006_project::Project};

static IDX_REGISTRATION_UNIQUE: &str = "idx_registration_project_id_member_id";
static IDX_REGISTRATION_BADGE_CODE: &str = "idx_registration_badge_code";
static FK_REGISTRATION_PROJECT_ID: &str = "fk_registration_project_id";
static FK_REGISTRATION_MEMBER_ID: &str = "fk_registration_member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(integer(Registration::ProjectId))
                    .col(integer(Registration::MemberId))
                    .col(string_null(Registration::BadgeCode))
                    .col(timestamp(Registration::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_UNIQUE)
                    .table(Registration::Table)
                    .col(Registration::ProjectId)
                    .col(Registration::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REGISTRATION_BADGE_CODE)
                    .table(Registration::Table)
                    .col(Registration::BadgeCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_PROJECT_ID)
                    .from_tbl(Registration::Table)
                    .from_col(Registration::ProjectId)
                    .to_tbl(Project::Table)
                    .to_col(Project::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REGISTRATION_MEMBER_ID)
                    .from_tbl(Registration::Table)
                    .from_col(Registration::MemberId)
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
                    .name(FK_REGISTRATION_MEMBER_ID)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REGISTRATION_PROJECT_ID)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_BADGE_CODE)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REGISTRATION_UNIQUE)
                    .table(Registration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    ProjectId,
    MemberId,
    BadgeCode,
    CreatedAt,
}
