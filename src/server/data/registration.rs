use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationRepository<'a> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        project_id: i32,
        member_id: i32,
        badge_code: Option<String>,
    ) -> Result<entity::registration::Model, DbErr> {
        let registration = entity::registration::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            member_id: ActiveValue::Set(member_id),
            badge_code: ActiveValue::Set(badge_code),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        registration.insert(self.db).await
    }

    pub async fn get_by_project_and_member(
        &self,
        project_id: i32,
        member_id: i32,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::ProjectId.eq(project_id))
            .filter(entity::registration::Column::MemberId.eq(member_id))
            .one(self.db)
            .await
    }

    pub async fn find_by_badge_code(
        &self,
        badge_code: &str,
    ) -> Result<Option<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::BadgeCode.eq(badge_code))
            .one(self.db)
            .await
    }

    pub async fn list_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<entity::registration::Model>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::ProjectId.eq(project_id))
            .all(self.db)
            .await
    }

    /// Returns the registration roster for a project together with member rows.
    ///
    /// The member side is `None` only if the registration references a member that
    /// no longer exists; such rows are skipped by callers.
    pub async fn list_with_members(
        &self,
        project_id: i32,
    ) -> Result<Vec<(entity::registration::Model, Option<entity::member::Model>)>, DbErr> {
        entity::prelude::Registration::find()
            .filter(entity::registration::Column::ProjectId.eq(project_id))
            .find_also_related(entity::prelude::Member)
            .all(self.db)
            .await
    }

}
