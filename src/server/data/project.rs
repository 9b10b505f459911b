use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::project::Model, DbErr> {
        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn get(&self, project_id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find().all(self.db).await
    }
}

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        project_id: i32,
        name: &str,
        is_primary: bool,
        starts_at: NaiveDateTime,
    ) -> Result<entity::project_event::Model, DbErr> {
        let event = entity::project_event::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            name: ActiveValue::Set(name.to_string()),
            is_primary: ActiveValue::Set(is_primary),
            starts_at: ActiveValue::Set(starts_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<entity::project_event::Model>, DbErr> {
        entity::prelude::ProjectEvent::find_by_id(event_id)
            .one(self.db)
            .await
    }

    pub async fn list_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<entity::project_event::Model>, DbErr> {
        entity::prelude::ProjectEvent::find()
            .filter(entity::project_event::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::project_event::Column::StartsAt)
            .all(self.db)
            .await
    }

    /// Returns the event flagged primary for the dashboard, preferring the most
    /// recently starting one if several are flagged.
    pub async fn get_primary(&self) -> Result<Option<entity::project_event::Model>, DbErr> {
        entity::prelude::ProjectEvent::find()
            .filter(entity::project_event::Column::IsPrimary.eq(true))
            .order_by_desc(entity::project_event::Column::StartsAt)
            .one(self.db)
            .await
    }
}
