//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and
//! Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/regions` / `GET /api/regions` - Region administration
/// - `POST /api/units` / `GET /api/units` - Unit administration
/// - `POST /api/users` / `GET /api/users/{user_id}` - User administration
/// - `POST /api/members` / `GET /api/members` - Member directory
/// - `POST /api/projects` / `GET /api/projects` - Projects
/// - `POST /api/projects/{project_id}/events` / `GET ...` - Project events
/// - `GET /api/projects/{project_id}/registrations` - Registration roster
/// - `GET /api/events/{event_id}` - Event lookup
/// - `GET /api/dashboard/event` - Primary dashboard event
/// - `POST /api/registrations` - Register a member
/// - `GET /api/events/{event_id}/roster` - Scope-filtered attendance roster
/// - `POST /api/events/{event_id}/attendance/{member_id}` - Toggle presence
/// - `POST /api/events/{event_id}/checkin` - Badge check-in
/// - `GET /api/events/{event_id}/attendance/summary` - Per-unit counts
/// - `GET /api/events/{event_id}/attendance/live` - SSE presence stream
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI
/// at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Keshav", description = "Keshav API"), tags(
        (name = controller::org::ORG_TAG, description = "Organization administration API routes"),
        (name = controller::user::USER_TAG, description = "User administration API routes"),
        (name = controller::member::MEMBER_TAG, description = "Member directory API routes"),
        (name = controller::event::EVENT_TAG, description = "Project and event API routes"),
        (name = controller::registration::REGISTRATION_TAG, description = "Registration API routes"),
        (name = controller::attendance::ATTENDANCE_TAG, description = "Attendance API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::org::create_region))
        .routes(routes!(controller::org::get_regions))
        .routes(routes!(controller::org::create_unit))
        .routes(routes!(controller::org::get_units))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::member::get_members))
        .routes(routes!(controller::member::create_member))
        .routes(routes!(controller::event::create_project))
        .routes(routes!(controller::event::get_projects))
        .routes(routes!(controller::event::create_event))
        .routes(routes!(controller::event::get_project_events))
        .routes(routes!(controller::event::get_event))
        .routes(routes!(controller::event::get_primary_event))
        .routes(routes!(controller::registration::register_member))
        .routes(routes!(controller::registration::get_project_registrations))
        .routes(routes!(controller::attendance::get_event_roster))
        .routes(routes!(controller::attendance::toggle_attendance))
        .routes(routes!(controller::attendance::check_in))
        .routes(routes!(controller::attendance::get_attendance_summary))
        .routes(routes!(controller::attendance::attendance_live))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
