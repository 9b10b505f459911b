use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_region::Region;

static IDX_KESHAV_USER_REGION_ID: &str = "idx_keshav_user_region_id";
static FK_KESHAV_USER_REGION_ID: &str = "fk_keshav_user_region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KeshavUser::Table)
                    .if_not_exists()
                    .col(pk_auto(KeshavUser::Id))
                    .col(string(KeshavUser::DisplayName))
                    .col(string(KeshavUser::Role))
                    .col(string(KeshavUser::Gender))
                    .col(integer_null(KeshavUser::RegionId))
                    .col(timestamp(KeshavUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KESHAV_USER_REGION_ID)
                    .table(KeshavUser::Table)
                    .col(KeshavUser::RegionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KESHAV_USER_REGION_ID)
                    .from_tbl(KeshavUser::Table)
                    .from_col(KeshavUser::RegionId)
                    .to_tbl(Region::Table)
                    .to_col(Region::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_KESHAV_USER_REGION_ID)
                    .table(KeshavUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KESHAV_USER_REGION_ID)
                    .table(KeshavUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KeshavUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KeshavUser {
    Table,
    Id,
    DisplayName,
    Role,
    Gender,
    RegionId,
    CreatedAt,
}
