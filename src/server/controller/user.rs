use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{scope::ScopeError, Error},
        model::app::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Create a new user with their role and scope assignments
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let user = user_repo
        .create(&dto.display_name, &dto.role, &dto.gender, dto.region_id)
        .await?;

    let mut unit_ids = Vec::with_capacity(dto.unit_ids.len());
    for unit_id in dto.unit_ids {
        let assignment = user_repo.assign_unit(user.id, unit_id).await?;
        unit_ids.push(assignment.unit_id);
    }

    Ok((
        StatusCode::CREATED,
        Json(UserDto {
            id: user.id,
            display_name: user.display_name,
            role: user.role,
            gender: user.gender,
            region_id: user.region_id,
            unit_ids,
        }),
    )
        .into_response())
}

/// Get a user with their scope assignments
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving the user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let user = user_repo
        .get(user_id)
        .await?
        .ok_or(ScopeError::ViewerNotFound(user_id))?;

    let unit_ids = user_repo
        .get_unit_assignments(user.id)
        .await?
        .into_iter()
        .map(|assignment| assignment.unit_id)
        .collect();

    Ok((
        StatusCode::OK,
        Json(UserDto {
            id: user.id,
            display_name: user.display_name,
            role: user.role,
            gender: user.gender,
            region_id: user.region_id,
            unit_ids,
        }),
    )
        .into_response())
}
