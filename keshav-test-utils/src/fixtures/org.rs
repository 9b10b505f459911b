//! Org tree and member fixtures.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct OrgFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrgFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_region(&self, name: &str) -> Result<entity::region::Model, TestError> {
        let region = entity::region::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(region.insert(self.db).await?)
    }

    pub async fn insert_unit(
        &self,
        name: &str,
        region_id: i32,
    ) -> Result<entity::org_unit::Model, TestError> {
        let unit = entity::org_unit::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            region_id: ActiveValue::Set(region_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(unit.insert(self.db).await?)
    }

    /// Insert a region and one unit inside it.
    pub async fn insert_region_with_unit(
        &self,
        region_name: &str,
        unit_name: &str,
    ) -> Result<(entity::region::Model, entity::org_unit::Model), TestError> {
        let region = self.insert_region(region_name).await?;
        let unit = self.insert_unit(unit_name, region.id).await?;

        Ok((region, unit))
    }

    pub async fn insert_member(
        &self,
        unit_id: i32,
        member_code: &str,
        first_name: &str,
        last_name: &str,
        gender: &str,
    ) -> Result<entity::member::Model, TestError> {
        let member = entity::member::ActiveModel {
            member_code: ActiveValue::Set(member_code.to_string()),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            gender: ActiveValue::Set(gender.to_string()),
            unit_id: ActiveValue::Set(unit_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(member.insert(self.db).await?)
    }

    /// Insert a member with standard test values derived from `n`.
    pub async fn insert_mock_member(
        &self,
        n: i32,
        unit_id: i32,
    ) -> Result<entity::member::Model, TestError> {
        self.insert_member(
            unit_id,
            &format!("K-{:03}", n),
            &format!("Member{}", n),
            "Mock",
            "male",
        )
        .await
    }
}
