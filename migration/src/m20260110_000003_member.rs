use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000002_org_unit::OrgUnit;

static IDX_MEMBER_UNIT_ID: &str = "idx_member_unit_id";
static FK_MEMBER_UNIT_ID: &str = "fk_member_unit_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_uniq(Member::MemberCode))
                    .col(string(Member::FirstName))
                    .col(string(Member::LastName))
                    .col(string(Member::Gender))
                    .col(integer(Member::UnitId))
                    .col(timestamp(Member::CreatedAt))
                    .col(timestamp(Member::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMBER_UNIT_ID)
                    .table(Member::Table)
                    .col(Member::UnitId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMBER_UNIT_ID)
                    .from_tbl(Member::Table)
                    .from_col(Member::UnitId)
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
                    .name(FK_MEMBER_UNIT_ID)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEMBER_UNIT_ID)
                    .table(Member::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    MemberCode,
    FirstName,
    LastName,
    Gender,
    UnitId,
    CreatedAt,
    UpdatedAt,
}
