use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        registration::{RegisterMemberDto, RegistrationDto},
    },
    server::{error::Error, model::app::AppState, service::registration::RegistrationService},
};

pub static REGISTRATION_TAG: &str = "registration";

/// Register a member for a project
#[utoipa::path(
    post,
    path = "/api/registrations",
    tag = REGISTRATION_TAG,
    request_body = RegisterMemberDto,
    responses(
        (status = 201, description = "Registration created", body = RegistrationDto),
        (status = 404, description = "Project or member not found", body = ErrorDto),
        (status = 409, description = "Duplicate registration or badge code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_member(
    State(state): State<AppState>,
    Json(dto): Json<RegisterMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let registration_service = RegistrationService::new(&state.db);

    let registration = registration_service.register(dto).await?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}

/// Get the registration roster for a project
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/registrations",
    tag = REGISTRATION_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Success when retrieving the roster", body = Vec<RegistrationDto>),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_registrations(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let registration_service = RegistrationService::new(&state.db);

    let roster = registration_service.roster(project_id).await?;

    Ok((StatusCode::OK, Json(roster)).into_response())
}
