use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    pub project_id: i32,
    pub member_id: i32,
    pub member_name: String,
    pub badge_code: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterMemberDto {
    pub project_id: i32,
    pub member_id: i32,
    /// Badge code issued at the registration desk; generated when omitted
    pub badge_code: Option<String>,
}
