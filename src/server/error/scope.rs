use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("Viewer header is not present on the request")]
    MissingViewerHeader,
    #[error("Viewer header could not be parsed as a user ID")]
    InvalidViewerHeader,
    #[error("Viewer user ID {0:?} not found in database")]
    ViewerNotFound(i32),
}

impl IntoResponse for ScopeError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingViewerHeader => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Viewer identity is required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidViewerHeader => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Viewer identity is malformed".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::ViewerNotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Viewer not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
