use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectDto {
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub is_primary: bool,
    pub starts_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateEventDto {
    pub name: String,
    pub is_primary: bool,
    pub starts_at: NaiveDateTime,
}
