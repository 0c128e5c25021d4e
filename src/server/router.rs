use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, category, server},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Server Directory API"),
    tags(
        (name = "server", description = "Server listing"),
        (name = "category", description = "Server categories"),
        (name = "auth", description = "Session user")
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document served under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(server::list_servers))
        .routes(routes!(category::list_categories))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
