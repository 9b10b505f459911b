use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, CreateProjectDto, EventDto, ProjectDto},
    },
    server::{
        data::project::{EventRepository, ProjectRepository},
        error::{attendance::AttendanceError, Error},
        model::app::AppState,
        service::attendance::summary::AttendanceSummaryService,
    },
};

pub static EVENT_TAG: &str = "event";

fn event_dto(event: entity::project_event::Model) -> EventDto {
    EventDto {
        id: event.id,
        project_id: event.project_id,
        name: event.name,
        is_primary: event.is_primary,
        starts_at: event.starts_at,
    }
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = EVENT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(dto): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let project_repo = ProjectRepository::new(&state.db);

    let project = project_repo.create(&dto.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectDto {
            id: project.id,
            name: project.name,
            created_at: project.created_at,
        }),
    )
        .into_response())
}

/// Create a new event under a project
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/events",
    tag = EVENT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Json(dto): Json<CreateEventDto>,
) -> Result<impl IntoResponse, Error> {
    let event_repo = EventRepository::new(&state.db);

    let event = event_repo
        .create(project_id, &dto.name, dto.is_primary, dto.starts_at)
        .await?;

    Ok((StatusCode::CREATED, Json(event_dto(event))).into_response())
}

/// Get all projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Success when retrieving projects", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let project_repo = ProjectRepository::new(&state.db);

    let projects: Vec<ProjectDto> = project_repo
        .list()
        .await?
        .into_iter()
        .map(|project| ProjectDto {
            id: project.id,
            name: project.name,
            created_at: project.created_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(projects)).into_response())
}

/// Get the events of a project, ordered by start time
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/events",
    tag = EVENT_TAG,
    params(("project_id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Success when retrieving events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_events(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let event_repo = EventRepository::new(&state.db);

    let events: Vec<EventDto> = event_repo
        .list_by_project(project_id)
        .await?
        .into_iter()
        .map(event_dto)
        .collect();

    Ok((StatusCode::OK, Json(events)).into_response())
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Success when retrieving the event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let event_repo = EventRepository::new(&state.db);

    let event = event_repo
        .get(event_id)
        .await?
        .ok_or(AttendanceError::EventNotFound(event_id))?;

    Ok((StatusCode::OK, Json(event_dto(event))).into_response())
}

/// Get the event currently flagged for the dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/event",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Success when retrieving the primary event", body = EventDto),
        (status = 404, description = "No event is flagged primary", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_primary_event(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let summary_service = AttendanceSummaryService::new(&state.db, &state.feed);

    let event = match summary_service.primary_event().await? {
        Some(event) => event,
        None => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No event is flagged primary".to_string(),
                }),
            )
                .into_response());
        }
    };

    Ok((StatusCode::OK, Json(event_dto(event))).into_response())
}
