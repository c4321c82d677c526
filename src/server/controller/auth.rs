use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::LoginDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Log in with username and password.
///
/// Verifies the credentials and stores the user's ID in the session.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database or session error
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out by clearing the session.
///
/// # Returns
/// - `204 No Content` - Session cleared, whether or not anyone was logged in
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The logged-in user with role and location
/// - `401 Unauthorized` - Nobody is logged in or the user no longer exists
/// - `500 Internal Server Error` - Database or session error
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = AuthService::new(&state.db).get_user(user_id).await? else {
        // Drop the stale session so the client is treated as logged out
        AuthSession::new(&session).clear().await;
        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}
