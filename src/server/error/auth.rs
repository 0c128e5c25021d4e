use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no authenticated user in its session.
    #[error("No user found in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The requested operation needs an authenticated caller and there is none.
    #[error("Authentication required: {0}")]
    AuthenticationFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized. The detailed reason is logged at debug
/// level while the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession => "Authentication credentials were not provided.",
            Self::UserNotInDatabase(_) | Self::AuthenticationFailed(_) => {
                "Incorrect authentication credentials."
            }
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
