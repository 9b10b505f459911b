//! Keshav user and assignment fixtures.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_user(
        &self,
        role: &str,
        gender: &str,
        region_id: Option<i32>,
    ) -> Result<entity::keshav_user::Model, TestError> {
        let user = entity::keshav_user::ActiveModel {
            display_name: ActiveValue::Set(format!("Test {}", role)),
            role: ActiveValue::Set(role.to_string()),
            gender: ActiveValue::Set(gender.to_string()),
            region_id: ActiveValue::Set(region_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    pub async fn assign_unit(
        &self,
        user_id: i32,
        unit_id: i32,
    ) -> Result<entity::user_unit_assignment::Model, TestError> {
        let assignment = entity::user_unit_assignment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            unit_id: ActiveValue::Set(unit_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(assignment.insert(self.db).await?)
    }
}
