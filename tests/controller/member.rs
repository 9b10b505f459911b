//! Tests for the member directory endpoints.

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use keshav::{
    model::member::CreateMemberDto,
    server::{
        controller::{
            member::{create_member, get_members},
            util::viewer::VIEWER_HEADER,
        },
        model::app::AppState,
    },
};
use keshav_test_utils::prelude::*;

fn viewer_headers(user_id: i32) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        VIEWER_HEADER,
        HeaderValue::from_str(&user_id.to_string()).unwrap(),
    );
    headers
}

/// Expect 200 OK with the directory for an admin viewer
#[tokio::test]
async fn get_members_success_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    test.org().insert_mock_member(1, unit.id).await?;
    let admin = test.users().insert_user("admin", "male", None).await?;

    let result = get_members(State(test.to_app_state::<AppState>()), viewer_headers(admin.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 UNAUTHORIZED when the viewer header is missing
#[tokio::test]
async fn get_members_unauthorized_without_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;

    let result = get_members(State(test.to_app_state::<AppState>()), HeaderMap::new()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 NOT FOUND when the viewer does not exist in the database
#[tokio::test]
async fn get_members_not_found_for_unknown_viewer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;

    let result = get_members(State(test.to_app_state::<AppState>()), viewer_headers(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 INTERNAL SERVER ERROR when required tables are missing
#[tokio::test]
async fn get_members_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_members(State(test.to_app_state::<AppState>()), viewer_headers(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 201 CREATED when creating a member in an existing unit
#[tokio::test]
async fn create_member_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;

    let result = create_member(
        State(test.to_app_state::<AppState>()),
        Json(CreateMemberDto {
            member_code: "K-100".to_string(),
            first_name: "Rohan".to_string(),
            last_name: "Desai".to_string(),
            gender: "male".to_string(),
            unit_id: unit.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}
