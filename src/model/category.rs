use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}
