//! Tests for the organization administration endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use keshav::{
    model::org::{CreateRegionDto, CreateUnitDto},
    server::{
        controller::org::{create_region, create_unit, get_units, UnitFilter},
        model::app::AppState,
    },
};
use keshav_test_utils::prelude::*;

/// Expect region and unit creation to succeed and unit listing to filter by region
#[tokio::test]
async fn create_and_list_org_tree() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;
    let state = test.to_app_state::<AppState>();

    let result = create_region(
        State(state.clone()),
        Json(CreateRegionDto {
            name: "North".to_string(),
        }),
    )
    .await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let (south, south_unit) = test.org().insert_region_with_unit("South", "South A").await?;

    let result = create_unit(
        State(state.clone()),
        Json(CreateUnitDto {
            name: "South B".to_string(),
            region_id: south.id,
        }),
    )
    .await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let result = get_units(
        State(state),
        Query(UnitFilter {
            region_id: Some(south_unit.region_id),
        }),
    )
    .await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect unit creation against a missing region to fail with a server error
#[tokio::test]
async fn create_unit_unknown_region_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;

    let result = create_unit(
        State(test.to_app_state::<AppState>()),
        Json(CreateUnitDto {
            name: "Orphan".to_string(),
            region_id: 404,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
