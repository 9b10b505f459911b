use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegionDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateRegionDto {
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnitDto {
    pub id: i32,
    pub name: String,
    pub region_id: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUnitDto {
    pub name: String,
    pub region_id: i32,
}
