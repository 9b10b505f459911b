use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct RegionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionRepository<'a> {
    /// Creates a new instance of [`RegionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::region::Model, DbErr> {
        let region = entity::region::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        region.insert(self.db).await
    }

    pub async fn get(&self, region_id: i32) -> Result<Option<entity::region::Model>, DbErr> {
        entity::prelude::Region::find_by_id(region_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::region::Model>, DbErr> {
        entity::prelude::Region::find().all(self.db).await
    }
}

pub struct OrgUnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrgUnitRepository<'a> {
    /// Creates a new instance of [`OrgUnitRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str, region_id: i32) -> Result<entity::org_unit::Model, DbErr> {
        let unit = entity::org_unit::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            region_id: ActiveValue::Set(region_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        unit.insert(self.db).await
    }

    pub async fn get(&self, unit_id: i32) -> Result<Option<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find_by_id(unit_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find().all(self.db).await
    }

    pub async fn list_by_region(
        &self,
        region_id: i32,
    ) -> Result<Vec<entity::org_unit::Model>, DbErr> {
        entity::prelude::OrgUnit::find()
            .filter(entity::org_unit::Column::RegionId.eq(region_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use keshav_test_utils::prelude::*;

    use crate::server::data::org::{OrgUnitRepository, RegionRepository};

    /// Expect success when creating a region
    #[tokio::test]
    async fn test_create_region_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let region_repo = RegionRepository::new(&test.db);

        let result = region_repo.create("North").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "North");

        Ok(())
    }

    /// Expect Error when creating a region without required tables being created
    #[tokio::test]
    async fn test_create_region_error() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let region_repo = RegionRepository::new(&test.db);

        let result = region_repo.create("North").await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect only units belonging to the requested region to be returned
    #[tokio::test]
    async fn test_list_units_by_region() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let region_repo = RegionRepository::new(&test.db);
        let unit_repo = OrgUnitRepository::new(&test.db);

        let north = region_repo.create("North").await?;
        let south = region_repo.create("South").await?;

        unit_repo.create("North A", north.id).await?;
        unit_repo.create("North B", north.id).await?;
        unit_repo.create("South A", south.id).await?;

        let north_units = unit_repo.list_by_region(north.id).await?;

        assert_eq!(north_units.len(), 2);
        assert!(north_units.iter().all(|u| u.region_id == north.id));

        Ok(())
    }

    /// Expect None when looking up a unit that does not exist
    #[tokio::test]
    async fn test_get_unit_none() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let unit_repo = OrgUnitRepository::new(&test.db);

        let result = unit_repo.get(1).await?;

        assert!(result.is_none());

        Ok(())
    }
}
