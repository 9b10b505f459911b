use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        org::{CreateRegionDto, CreateUnitDto, RegionDto, UnitDto},
    },
    server::{
        data::org::{OrgUnitRepository, RegionRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static ORG_TAG: &str = "org";

fn unit_dto(unit: entity::org_unit::Model) -> UnitDto {
    UnitDto {
        id: unit.id,
        name: unit.name,
        region_id: unit.region_id,
    }
}

/// Create a new region
#[utoipa::path(
    post,
    path = "/api/regions",
    tag = ORG_TAG,
    request_body = CreateRegionDto,
    responses(
        (status = 201, description = "Region created", body = RegionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    Json(dto): Json<CreateRegionDto>,
) -> Result<impl IntoResponse, Error> {
    let region_repo = RegionRepository::new(&state.db);

    let region = region_repo.create(&dto.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegionDto {
            id: region.id,
            name: region.name,
        }),
    )
        .into_response())
}

/// Get all regions
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = ORG_TAG,
    responses(
        (status = 200, description = "Success when retrieving regions", body = Vec<RegionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_regions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let region_repo = RegionRepository::new(&state.db);

    let regions: Vec<RegionDto> = region_repo
        .list()
        .await?
        .into_iter()
        .map(|region| RegionDto {
            id: region.id,
            name: region.name,
        })
        .collect();

    Ok((StatusCode::OK, Json(regions)).into_response())
}

/// Create a new unit within a region
#[utoipa::path(
    post,
    path = "/api/units",
    tag = ORG_TAG,
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Unit created", body = UnitDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_unit(
    State(state): State<AppState>,
    Json(dto): Json<CreateUnitDto>,
) -> Result<impl IntoResponse, Error> {
    let unit_repo = OrgUnitRepository::new(&state.db);

    let unit = unit_repo.create(&dto.name, dto.region_id).await?;

    Ok((StatusCode::CREATED, Json(unit_dto(unit))).into_response())
}

#[derive(Deserialize)]
pub struct UnitFilter {
    pub region_id: Option<i32>,
}

/// Get units, optionally filtered to one region
#[utoipa::path(
    get,
    path = "/api/units",
    tag = ORG_TAG,
    params(("region_id" = Option<i32>, Query, description = "Only units in this region")),
    responses(
        (status = 200, description = "Success when retrieving units", body = Vec<UnitDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_units(
    State(state): State<AppState>,
    Query(filter): Query<UnitFilter>,
) -> Result<impl IntoResponse, Error> {
    let unit_repo = OrgUnitRepository::new(&state.db);

    let units = match filter.region_id {
        Some(region_id) => unit_repo.list_by_region(region_id).await?,
        None => unit_repo.list().await?,
    };

    let units: Vec<UnitDto> = units.into_iter().map(unit_dto).collect();

    Ok((StatusCode::OK, Json(units)).into_response())
}
