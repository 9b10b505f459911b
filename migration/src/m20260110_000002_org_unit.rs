use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_region::Region;

static IDX_ORG_UNIT_REGION_ID: &str = "idx_org_unit_region_id";
static FK_ORG_UNIT_REGION_ID: &str = "fk_org_unit_region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrgUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(OrgUnit::Id))
                    .col(string(OrgUnit::Name))
                    .col(integer(OrgUnit::RegionId))
                    .col(timestamp(OrgUnit::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORG_UNIT_REGION_ID)
                    .table(OrgUnit::Table)
                    .col(OrgUnit::RegionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ORG_UNIT_REGION_ID)
                    .from_tbl(OrgUnit::Table)
                    .from_col(OrgUnit::RegionId)
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
                    .name(FK_ORG_UNIT_REGION_ID)
                    .table(OrgUnit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORG_UNIT_REGION_ID)
                    .table(OrgUnit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OrgUnit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OrgUnit {
    Table,
    Id,
    Name,
    RegionId,
    CreatedAt,
}
