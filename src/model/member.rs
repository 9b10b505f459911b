use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub member_code: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub unit_id: i32,
    pub region_id: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMemberDto {
    pub member_code: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub unit_id: i32,
}

