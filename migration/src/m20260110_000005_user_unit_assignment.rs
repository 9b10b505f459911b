use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260110_000002_org_unit::OrgUnit, m20260110_000004_keshav_user::KeshavUser};

static IDX_USER_UNIT_ASSIGNMENT_UNIQUE: &str = "idx_user_unit_assignment_user_id_unit_id";
static FK_USER_UNIT_ASSIGNMENT_USER_ID: &str = "fk_user_unit_assignment_user_id";
static FK_USER_UNIT_ASSIGNMENT_UNIT_ID: &str = "fk_user_unit_assignment_unit_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserUnitAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(UserUnitAssignment::Id))
                    .col(integer(UserUnitAssignment::UserId))
                    .col(integer(UserUnitAssignment::UnitId))
                    .col(timestamp(UserUnitAssignment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_UNIT_ASSIGNMENT_UNIQUE)
                    .table(UserUnitAssignment::Table)
                    .col(UserUnitAssignment::UserId)
                    .col(UserUnitAssignment::UnitId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_UNIT_ASSIGNMENT_USER_ID)
                    .from_tbl(UserUnitAssignment::Table)
                    .from_col(UserUnitAssignment::UserId)
                    .to_tbl(KeshavUser::Table)
                    .to_col(KeshavUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_UNIT_ASSIGNMENT_UNIT_ID)
                    .from_tbl(UserUnitAssignment::Table)
                    .from_col(UserUnitAssignment::UnitId)
                    .to_tbl(OrgUnit::Table)
                    .to_col(OrgUnit::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_UNIT_ASSIGNMENT_UNIT_ID)
                    .table(UserUnitAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_UNIT_ASSIGNMENT_USER_ID)
                    .table(UserUnitAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_UNIT_ASSIGNMENT_UNIQUE)
                    .table(UserUnitAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserUnitAssignment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserUnitAssignment {
    Table,
    Id,
    UserId,
    UnitId,
    CreatedAt,
}
