use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Projection of a server returned by the listing endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
    /// Name of the server's category.
    pub category: String,
    /// Live member count, present only when requested with `with_num_members=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_members: Option<u64>,
}

/// Raw query string of the server listing endpoint.
///
/// Every value is kept as the string the client sent; `ServerListQuery::from_dto`
/// validates them once at request entry.
#[derive(Deserialize, Default, Debug, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListParamsDto {
    /// Category of server to retrieve
    pub category: Option<String>,
    /// Maximum number of servers to return
    pub qty: Option<String>,
    /// `true` to only return servers the caller is a member of (requires authentication)
    pub by_user: Option<String>,
    /// Only return the server with this ID (requires authentication)
    pub by_serverid: Option<String>,
    /// `true` to include the member count of each server
    pub with_num_members: Option<String>,
}
