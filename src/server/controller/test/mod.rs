use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, middleware::session::AuthSession, state::AppState};


/// Converts a handler result into a response and decodes its JSON body.
async fn into_json<T: IntoResponse>(result: Result<T, AppError>) -> (StatusCode, Value) {
    let response: Response = match result {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    };
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
