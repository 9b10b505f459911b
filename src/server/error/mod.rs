//! Error types for the Keshav server application.
//!
//! This module provides the error handling system with specialized error types for
//! different domains (attendance, registration, scope resolution, configuration).
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait implementations.

pub mod attendance;
pub mod config;
pub mod registration;
pub mod scope;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        attendance::AttendanceError, config::ConfigError, registration::RegistrationError,
        scope::ScopeError,
    },
};

/// Main error type for the Keshav server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type. `thiserror`'s `#[from]` attribute enables automatic conversion
/// from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Attendance error (event lookup, badge check-in, presence sync).
    #[error(transparent)]
    AttendanceError(#[from] AttendanceError),
    /// Registration error (roster membership, badge code issuance).
    #[error(transparent)]
    RegistrationError(#[from] RegistrationError),
    /// Scope resolution error (viewer identity, role assignments).
    #[error(transparent)]
    ScopeError(#[from] ScopeError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Keshav's code.
    ///
    /// This error should never occur in normal operation and indicates a programming
    /// error that needs to be reported as an issue.
    #[error("Internal error with Keshav's code, please open an issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Test-only bridge so `?` can propagate application errors through
/// `keshav_test_utils::TestError` in this crate's own unit tests.
///
/// The public `From<keshav::server::error::Error>` lives in `keshav-test-utils`,
/// but the dev-dependency cycle means `cargo test --lib` compiles a distinct
/// instance of this crate whose `Error` type is not the one that impl names.
/// This covers the under-test instance.
#[cfg(test)]
impl From<Error> for keshav_test_utils::TestError {
    fn from(err: Error) -> Self {
        keshav_test_utils::TestError::Keshav(err.to_string())
    }
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings; everything else is treated as an
/// internal server error (500) with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AttendanceError(err) => err.into_response(),
            Self::RegistrationError(err) => err.into_response(),
            Self::ScopeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error
/// response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
