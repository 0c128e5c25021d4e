use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Invalid or unsatisfiable request input. Always a 400 Bad Request.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// The server id filter matched nothing in the narrowed result.
    ///
    /// Holds the id exactly as the client sent it.
    #[error("Server with id {0} not found")]
    ServerNotFound(String),

    /// The server id is not a well-formed integer identifier.
    #[error("Server value error")]
    ServerValue,

    /// The quantity is not a non-negative integer.
    #[error("Quantity value error")]
    QuantityValue,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
