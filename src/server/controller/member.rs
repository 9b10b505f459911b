use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{CreateMemberDto, MemberDto},
    },
    server::{
        controller::util::viewer::viewer_id, error::Error, model::app::AppState,
        service::member::MemberService,
    },
};

pub static MEMBER_TAG: &str = "member";

/// Get the member directory visible to the requesting viewer
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Success when retrieving the member directory", body = Vec<MemberDto>),
        (status = 401, description = "Viewer identity missing", body = ErrorDto),
        (status = 404, description = "Viewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let viewer = viewer_id(&headers)?;
    let directory = member_service.directory(viewer).await?;

    Ok((StatusCode::OK, Json(directory)).into_response())
}

/// Create a new member
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(dto): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let member_service = MemberService::new(&state.db);

    let member = member_service.create_member(dto).await?;

    Ok((StatusCode::CREATED, Json(member)).into_response())
}
