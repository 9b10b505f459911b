use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        display_name: &str,
        role: &str,
        gender: &str,
        region_id: Option<i32>,
    ) -> Result<entity::keshav_user::Model, DbErr> {
        let user = entity::keshav_user::ActiveModel {
            display_name: ActiveValue::Set(display_name.to_string()),
            role: ActiveValue::Set(role.to_string()),
            gender: ActiveValue::Set(gender.to_string()),
            region_id: ActiveValue::Set(region_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::keshav_user::Model>, DbErr> {
        entity::prelude::KeshavUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Grants the user visibility over a unit; backing rows for unit-scoped roles.
    pub async fn assign_unit(
        &self,
        user_id: i32,
        unit_id: i32,
    ) -> Result<entity::user_unit_assignment::Model, DbErr> {
        let assignment = entity::user_unit_assignment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            unit_id: ActiveValue::Set(unit_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        assignment.insert(self.db).await
    }

    pub async fn get_unit_assignments(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::user_unit_assignment::Model>, DbErr> {
        entity::prelude::UserUnitAssignment::find()
            .filter(entity::user_unit_assignment::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use keshav_test_utils::prelude::*;

    use crate::server::data::user::UserRepository;

    /// Expect success when creating a user without a region
    #[tokio::test]
    async fn test_create_user_success() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let user_repo = UserRepository::new(&test.db);

        let result = user_repo.create("Admin One", "admin", "male", None).await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.role, "admin");
        assert!(user.region_id.is_none());

        Ok(())
    }

    /// Expect Error when creating a user without required tables being created
    #[tokio::test]
    async fn test_create_user_error() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let user_repo = UserRepository::new(&test.db);

        let result = user_repo.create("Admin One", "admin", "male", None).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect unit assignments to be returned for the requested user only
    #[tokio::test]
    async fn test_get_unit_assignments() -> Result<(), TestError> {
        let test = TestBuilder::new().with_org_tables().build().await?;
        let (_, unit_a) = test.org().insert_region_with_unit("North", "North A").await?;
        let (_, unit_b) = test.org().insert_region_with_unit("South", "South A").await?;

        let user_repo = UserRepository::new(&test.db);
        let coordinator = user_repo
            .create("Coordinator One", "coordinator", "female", None)
            .await?;
        let other = user_repo
            .create("Coordinator Two", "coordinator", "male", None)
            .await?;

        user_repo.assign_unit(coordinator.id, unit_a.id).await?;
        user_repo.assign_unit(coordinator.id, unit_b.id).await?;
        user_repo.assign_unit(other.id, unit_b.id).await?;

        let assignments = user_repo.get_unit_assignments(coordinator.id).await?;

        assert_eq!(assignments.len(), 2);
        assert!(assignments.iter().all(|a| a.user_id == coordinator.id));

        Ok(())
    }
}
