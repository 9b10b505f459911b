use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        attendance::{
            AttendanceSummaryDto, CheckInDto, PresenceDeltaDto, RosterEntryDto, ToggleResultDto,
        },
    },
    server::{
        controller::util::viewer::viewer_id,
        error::Error,
        model::app::AppState,
        service::{
            attendance::{
                marking::AttendanceMarkingService, summary::AttendanceSummaryService,
            },
            scope::ScopeResolver,
        },
    },
};

pub static ATTENDANCE_TAG: &str = "attendance";

/// Get the scope-filtered attendance roster for an event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/roster",
    tag = ATTENDANCE_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Success when retrieving the roster", body = Vec<RosterEntryDto>),
        (status = 401, description = "Viewer identity missing", body = ErrorDto),
        (status = 404, description = "Event or viewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_roster(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let scope_resolver = ScopeResolver::new(&state.db);
    let marking_service = AttendanceMarkingService::new(&state.db, &state.feed);

    let viewer = viewer_id(&headers)?;
    let scope = scope_resolver.resolve(viewer).await?;
    let roster = marking_service.roster_with_presence(&scope, event_id).await?;

    Ok((StatusCode::OK, Json(roster)).into_response())
}

/// Toggle a member's presence at an event
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/attendance/{member_id}",
    tag = ATTENDANCE_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Presence toggled", body = ToggleResultDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 502, description = "Sync failed, change rolled back", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_attendance(
    State(state): State<AppState>,
    Path((event_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let marking_service = AttendanceMarkingService::new(&state.db, &state.feed);

    let (mut session, mut subscription) = marking_service.open_session(event_id).await?;
    let result = marking_service
        .toggle_presence(&mut session, member_id)
        .await;

    subscription.close();
    session.close();

    let present = result?;

    Ok((StatusCode::OK, Json(ToggleResultDto { member_id, present })).into_response())
}

/// Check a member in from a scanned badge code
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/checkin",
    tag = ATTENDANCE_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    request_body = CheckInDto,
    responses(
        (status = 200, description = "Member checked in", body = ToggleResultDto),
        (status = 404, description = "Event or badge not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    Json(dto): Json<CheckInDto>,
) -> Result<impl IntoResponse, Error> {
    let marking_service = AttendanceMarkingService::new(&state.db, &state.feed);

    let (member_id, present) = marking_service
        .check_in_by_badge(event_id, &dto.badge_code)
        .await?;

    Ok((StatusCode::OK, Json(ToggleResultDto { member_id, present })).into_response())
}

/// Get per-unit attendance counts for an event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/attendance/summary",
    tag = ATTENDANCE_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Success when retrieving the summary", body = AttendanceSummaryDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_summary(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let summary_service = AttendanceSummaryService::new(&state.db, &state.feed);

    let summary = summary_service.summarize(event_id).await?;

    Ok((StatusCode::OK, Json(summary)).into_response())
}

/// Stream live presence deltas for an event as server-sent events
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/attendance/live",
    tag = ATTENDANCE_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "SSE stream of presence deltas"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attendance_live(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let summary_service = AttendanceSummaryService::new(&state.db, &state.feed);

    let (session, subscription) = summary_service.open_live(event_id).await?;

    // The session and subscription travel with the stream; dropping the stream on
    // client disconnect tears both down.
    let stream = futures::stream::unfold(
        (session, subscription),
        |(mut session, mut subscription)| async move {
            loop {
                let change = subscription.next().await?;

                if let Some(delta) = session.apply_change(&change) {
                    let dto = PresenceDeltaDto {
                        member_id: delta.member_id,
                        present: delta.present,
                        total_present: session.ledger().len() as u64,
                    };

                    let event = match Event::default().json_data(&dto) {
                        Ok(event) => event,
                        Err(err) => {
                            tracing::error!(error = %err, "failed to serialize presence delta");
                            return None;
                        }
                    };

                    return Some((Ok::<_, Infallible>(event), (session, subscription)));
                }
            }
        },
    );

    Ok(Sse::new(stream)
        .keep_alive(KeepAlive::default())
        .into_response())
}
