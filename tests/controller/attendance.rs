//! Tests for the attendance endpoints.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use keshav::{
    model::attendance::CheckInDto,
    server::{
        controller::{
            attendance::{check_in, get_attendance_summary, get_event_roster, toggle_attendance},
            util::viewer::VIEWER_HEADER,
        },
        data::attendance::AttendanceRepository,
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

/// Expect 200 OK with the roster for an admin viewer
#[tokio::test]
async fn get_event_roster_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let member = test.org().insert_mock_member(1, unit.id).await?;
    let (project, event) = test.projects().insert_project_with_event("Winter Camp").await?;
    test.projects()
        .insert_registration(project.id, member.id, None)
        .await?;
    let admin = test.users().insert_user("admin", "male", None).await?;

    let result = get_event_roster(
        State(test.to_app_state::<AppState>()),
        Path(event.id),
        viewer_headers(admin.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 NOT FOUND for the roster of a missing event
#[tokio::test]
async fn get_event_roster_unknown_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let admin = test.users().insert_user("admin", "male", None).await?;

    let result = get_event_roster(
        State(test.to_app_state::<AppState>()),
        Path(404),
        viewer_headers(admin.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect toggling to mark a member present and a second toggle to unmark them
#[tokio::test]
async fn toggle_attendance_marks_and_unmarks() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let member = test.org().insert_mock_member(1, unit.id).await?;
    let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

    let state = test.to_app_state::<AppState>();

    let result = toggle_attendance(State(state.clone()), Path((event.id, member.id))).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let attendance_repo = AttendanceRepository::new(&test.db);
    assert!(attendance_repo
        .get_by_event_and_member(event.id, member.id)
        .await?
        .is_some());

    let result = toggle_attendance(State(state), Path((event.id, member.id))).await;
    assert!(result.is_ok());

    assert!(attendance_repo
        .get_by_event_and_member(event.id, member.id)
        .await?
        .is_none());

    Ok(())
}

/// Expect 404 NOT FOUND when toggling attendance for a missing event
#[tokio::test]
async fn toggle_attendance_unknown_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;

    let result = toggle_attendance(State(test.to_app_state::<AppState>()), Path((404, 1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect badge check-in to return 200 OK and persist the mark
#[tokio::test]
async fn check_in_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let member = test.org().insert_mock_member(1, unit.id).await?;
    let (project, event) = test.projects().insert_project_with_event("Winter Camp").await?;
    test.projects()
        .insert_registration(project.id, member.id, Some("BDG-1"))
        .await?;

    let result = check_in(
        State(test.to_app_state::<AppState>()),
        Path(event.id),
        Json(CheckInDto {
            badge_code: "BDG-1".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let attendance_repo = AttendanceRepository::new(&test.db);
    assert!(attendance_repo
        .get_by_event_and_member(event.id, member.id)
        .await?
        .is_some());

    Ok(())
}

/// Expect 404 NOT FOUND for an unknown badge code
#[tokio::test]
async fn check_in_unknown_badge() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, event) = test.projects().insert_project_with_event("Winter Camp").await?;

    let result = check_in(
        State(test.to_app_state::<AppState>()),
        Path(event.id),
        Json(CheckInDto {
            badge_code: "BDG-404".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with per-unit counts for the summary endpoint
#[tokio::test]
async fn get_attendance_summary_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_attendance_tables().build().await?;
    let (_, unit) = test.org().insert_region_with_unit("North", "North A").await?;
    let member = test.org().insert_mock_member(1, unit.id).await?;
    let (project, event) = test.projects().insert_project_with_event("Winter Camp").await?;
    test.projects()
        .insert_registration(project.id, member.id, None)
        .await?;

    let attendance_repo = AttendanceRepository::new(&test.db);
    attendance_repo.insert(event.id, member.id).await?;

    let result = get_attendance_summary(State(test.to_app_state::<AppState>()), Path(event.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
