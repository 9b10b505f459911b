//! Tests for the user administration endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use keshav::{
    model::user::CreateUserDto,
    server::{
        controller::user::{create_user, get_user},
        data::user::UserRepository,
        model::app::AppState,
    },
};
use keshav_test_utils::prelude::*;

/// Expect user creation to persist the role and unit assignments
#[tokio::test]
async fn create_user_with_assignments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;
    let (_, unit_a) = test.org().insert_region_with_unit("North", "North A").await?;
    let (_, unit_b) = test.org().insert_region_with_unit("South", "South A").await?;

    let result = create_user(
        State(test.to_app_state::<AppState>()),
        Json(CreateUserDto {
            display_name: "Coordinator One".to_string(),
            role: "coordinator".to_string(),
            gender: "female".to_string(),
            region_id: None,
            unit_ids: vec![unit_a.id, unit_b.id],
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user_repo = UserRepository::new(&test.db);
    let assignments = user_repo.get_unit_assignments(1).await?;
    assert_eq!(assignments.len(), 2);

    Ok(())
}

/// Expect user lookup to return the user with their assignments
#[tokio::test]
async fn get_user_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let user = test.users().insert_user("coordinator", "male", None).await?;
    test.users().assign_unit(user.id, unit.id).await?;

    let result = get_user(State(test.to_app_state::<AppState>()), Path(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 NOT FOUND when the user does not exist
#[tokio::test]
async fn get_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;

    let result = get_user(State(test.to_app_state::<AppState>()), Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
