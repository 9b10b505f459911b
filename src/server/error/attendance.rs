use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("Event ID {0:?} not found")]
    EventNotFound(i32),
    #[error("No registration found for badge code {0:?}")]
    UnknownBadge(String),
    #[error("Timed out loading attendance records for event ID {0:?}")]
    LoadTimedOut(i32),
    #[error("Failed to sync attendance for member ID {0:?}, local change was rolled back")]
    SyncFailed(i32),
    #[error("Attendance session for event ID {0:?} is closed")]
    SessionClosed(i32),
}

impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        match self {
            Self::EventNotFound(event_id) => {
                tracing::debug!(event_id = %event_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Event not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UnknownBadge(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "No registration matches this badge".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::LoadTimedOut(event_id) => {
                tracing::warn!(event_id = %event_id, "{}", self);

                (
                    StatusCode::GATEWAY_TIMEOUT,
                    Json(ErrorDto {
                        error: "Timed out loading attendance, please retry".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::SyncFailed(member_id) => {
                tracing::warn!(member_id = %member_id, "{}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Attendance sync failed, check your connection and retry"
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            Self::SessionClosed(_) => InternalServerError(self).into_response(),
        }
    }
}
