use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the logged in user.
///
/// # Returns
/// - `200 OK` - The session's user
/// - `401 Unauthorized` - No user in session, or the user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Currently logged in user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_session_user(&session)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out.
///
/// Clears the session. Succeeds for anonymous sessions too.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).logout(&session).await;

    Ok(StatusCode::NO_CONTENT)
}
