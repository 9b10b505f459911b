//! Project, event, and registration fixtures.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct ProjectFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_project(&self, name: &str) -> Result<entity::project::Model, TestError> {
        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(project.insert(self.db).await?)
    }

    pub async fn insert_event(
        &self,
        project_id: i32,
        name: &str,
        is_primary: bool,
    ) -> Result<entity::project_event::Model, TestError> {
        let event = entity::project_event::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            name: ActiveValue::Set(name.to_string()),
            is_primary: ActiveValue::Set(is_primary),
            starts_at: ActiveValue::Set(Utc::now().naive_utc()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(event.insert(self.db).await?)
    }

    /// Insert a project with one non-primary event.
    pub async fn insert_project_with_event(
        &self,
        name: &str,
    ) -> Result<(entity::project::Model, entity::project_event::Model), TestError> {
        let project = self.insert_project(name).await?;
        let event = self.insert_event(project.id, "Day 1", false).await?;

        Ok((project, event))
    }

    pub async fn insert_registration(
        &self,
        project_id: i32,
        member_id: i32,
        badge_code: Option<&str>,
    ) -> Result<entity::registration::Model, TestError> {
        let registration = entity::registration::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            member_id: ActiveValue::Set(member_id),
            badge_code: ActiveValue::Set(badge_code.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(registration.insert(self.db).await?)
    }
}
