use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub display_name: String,
    pub role: String,
    pub gender: String,
    pub region_id: Option<i32>,
    pub unit_ids: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub display_name: String,
    pub role: String,
    pub gender: String,
    /// Region for region-scoped roles
    pub region_id: Option<i32>,
    /// Units granted to unit-scoped roles
    pub unit_ids: Vec<i32>,
}
