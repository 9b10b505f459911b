use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Project ID {0:?} not found")]
    ProjectNotFound(i32),
    #[error("Member ID {0:?} not found")]
    MemberNotFound(i32),
    #[error("Member ID {member_id:?} is already registered for project ID {project_id:?}")]
    AlreadyRegistered { member_id: i32, project_id: i32 },
    #[error("Badge code {0:?} is already assigned to another registration")]
    BadgeCodeTaken(String),
}

impl RegistrationError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }

    fn conflict(message: &str) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ProjectNotFound(_) => Self::not_found("Project not found"),
            Self::MemberNotFound(_) => Self::not_found("Member not found"),
            Self::AlreadyRegistered { .. } => {
                Self::conflict("Member is already registered for this project")
            }
            Self::BadgeCodeTaken(_) => Self::conflict("Badge code is already in use"),
        }
    }
}
