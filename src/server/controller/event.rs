use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::event::{EventDto, EventRangeDto, EventsFilterDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::event::{Event, EventsFilter},
        service::event::EventService,
        state::AppState,
        validator::ALL_ROLES,
    },
};

fn into_dtos(events: Vec<Event>) -> Vec<EventDto> {
    events.into_iter().map(Event::into_dto).collect()
}

/// Get the events of a group within a time range.
///
/// `start` and `finish` are `yyyy-MM-ddTHH:mm:ss` query parameters; both bounds are
/// inclusive.
///
/// # Returns
/// - `200 OK` - Events ordered by timestamp
/// - `400 Bad Request` - Missing or malformed range
/// - `401 Unauthorized` - User not logged in
/// - `404 Not Found` - No group with that ID
pub async fn get_group_events(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Query(range): Query<EventRangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let events = EventService::new(&state.db)
        .get_events_by_group_id(&user, group_id, range.start, range.finish)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Get the key-date events of a group.
pub async fn get_group_key_events(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let events = EventService::new(&state.db)
        .get_key_events_by_group_id(&user, group_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}

/// Get the events of several groups, optionally limited to a range or to key dates.
pub async fn filter_events(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<EventsFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let filter = EventsFilter::from_dto(payload);
    let events = EventService::new(&state.db)
        .get_events_by_filter(&user, &filter)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(events))))
}
