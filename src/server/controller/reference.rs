//! Reference data endpoints.
//!
//! All endpoints require a logged-in user of any role.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        location::Location,
        reference::{EnglishLevel, EventType, Expert, Status},
    },
    service::reference::ReferenceService,
    state::AppState,
    validator::ALL_ROLES,
};

pub async fn get_locations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let locations = ReferenceService::new(&state.db).get_locations().await?;
    let dtos: Vec<_> = locations.into_iter().map(Location::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_statuses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let statuses = ReferenceService::new(&state.db).get_statuses().await?;
    let dtos: Vec<_> = statuses.into_iter().map(Status::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_english_levels(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let levels = ReferenceService::new(&state.db).get_english_levels().await?;
    let dtos: Vec<_> = levels.into_iter().map(EnglishLevel::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_experts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let experts = ReferenceService::new(&state.db).get_experts().await?;
    let dtos: Vec<_> = experts.into_iter().map(Expert::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_event_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(ALL_ROLES).await?;

    let event_types = ReferenceService::new(&state.db).get_event_types().await?;
    let dtos: Vec<_> = event_types.into_iter().map(EventType::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
