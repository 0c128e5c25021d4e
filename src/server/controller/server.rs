use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        server::{ServerDto, ServerListParamsDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::server::ServerListQuery,
        service::server::ServerService, state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List servers.
///
/// Returns servers ordered by id, narrowed by every supplied filter. Parameters are
/// applied in a fixed order: category, membership of the caller, member count
/// annotation, quantity and finally the server id, which is matched against the
/// already truncated page.
///
/// # Access Control
/// - Public, unless `by_user=true` or `by_serverid` is supplied, which require a
///   logged in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session, used when the filters require a caller
/// - `params` - Raw listing parameters
///
/// # Returns
/// - `200 OK` - Matching servers
/// - `400 Bad Request` - Malformed `qty` or `by_serverid`, or no server with that id
/// - `401 Unauthorized` - Filter requires a logged in user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/server/select",
    tag = SERVER_TAG,
    params(ServerListParamsDto),
    responses(
        (status = 200, description = "Successfully retrieved servers", body = Vec<ServerDto>),
        (status = 400, description = "Invalid parameter or server not found", body = ErrorDto),
        (status = 401, description = "Filter requires an authenticated user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ServerListParamsDto>,
) -> Result<impl IntoResponse, AppError> {
    let query = ServerListQuery::from_dto(params);

    let caller = if query.requires_authentication() {
        AuthGuard::new(&state.db, &session).current_user().await?
    } else {
        None
    };

    let servers = ServerService::new(&state.db).list(query, caller).await?;

    let servers_dto: Vec<ServerDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(servers_dto)))
}
