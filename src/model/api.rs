use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every non-2xx response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
