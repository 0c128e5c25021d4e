use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, category::CategoryDto},
    server::{error::AppError, service::category::CategoryService, state::AppState},
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories.
///
/// Returns every category ordered by name, giving clients the valid values of the
/// server listing's `category` filter.
///
/// # Returns
/// - `200 OK` - All categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/category/select",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let categories_dto: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(categories_dto)))
}
