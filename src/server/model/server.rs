//! Server domain models and listing parameters.
//!
//! `ServerListQuery` is the validated form of the listing endpoint's query string. It is
//! built once per request from `ServerListParamsDto` and drives every filter stage.

use std::num::IntErrorKind;

use crate::{
    model::server::{ServerDto, ServerListParamsDto},
    server::error::{validation::ValidationError, AppError},
};

/// Flag values are only enabled by this exact literal.
const FLAG_ENABLED: &str = "true";

/// A server as returned by the listing, with its category resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub category: String,
    /// Live member count; `None` unless the listing asked for it.
    pub num_members: Option<u64>,
}

impl Server {
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            description: self.description,
            owner_id: self.owner_id,
            category: self.category,
            num_members: self.num_members,
        }
    }

    /// Converts a fetched row to a server domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Server)` - The converted server
    /// - `Err(AppError::InternalError)` - The row's category was not loaded, which means
    ///   the `category_id` foreign key points at a missing category
    pub fn from_row(row: ServerRow) -> Result<Self, AppError> {
        let Some(category) = row.category else {
            return Err(AppError::InternalError(format!(
                "Category {} of server {} not found",
                row.server.category_id, row.server.id
            )));
        };

        Ok(Self {
            id: row.server.id,
            name: row.server.name,
            description: row.server.description,
            owner_id: row.server.owner_id,
            category: category.name,
            num_members: row.num_members,
        })
    }
}

/// A server entity together with its category and optional member count.
#[derive(Debug, Clone)]
pub struct ServerRow {
    pub server: entity::server::Model,
    pub category: Option<entity::category::Model>,
    pub num_members: Option<u64>,
}

/// Query of the server listing endpoint.
///
/// Empty strings are treated as absent for every field. Numeric values are kept as
/// supplied and only parsed once the caller has been authorized, so a malformed value
/// never masks an authentication failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListQuery {
    /// Exact category name to filter on.
    pub category: Option<String>,
    /// Maximum number of servers, exactly as supplied; parsed by `quantity()`.
    pub qty: Option<String>,
    /// Only servers the caller is a member of.
    pub by_user: bool,
    /// Server id exactly as supplied; parsed by `server_id()`.
    pub by_serverid: Option<String>,
    /// Attach live member counts.
    pub with_num_members: bool,
}

impl ServerListQuery {
    /// Reads the raw query string values.
    pub fn from_dto(dto: ServerListParamsDto) -> Self {
        Self {
            category: non_empty(dto.category),
            qty: non_empty(dto.qty),
            by_user: dto.by_user.as_deref() == Some(FLAG_ENABLED),
            by_serverid: non_empty(dto.by_serverid),
            with_num_members: dto.with_num_members.as_deref() == Some(FLAG_ENABLED),
        }
    }

    /// Whether the listing may only be served to an authenticated caller.
    ///
    /// `by_user` always requires a caller. Without it, only the id lookup does.
    pub fn requires_authentication(&self) -> bool {
        self.by_user || self.by_serverid.is_some()
    }

    /// Parses the requested quantity, if any.
    ///
    /// # Returns
    /// - `Ok(Some(qty))` - A non-negative integer was supplied
    /// - `Ok(None)` - No truncation
    /// - `Err(ValidationError::QuantityValue)` - `qty` is not a non-negative integer
    pub fn quantity(&self) -> Result<Option<u64>, ValidationError> {
        self.qty
            .as_deref()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ValidationError::QuantityValue)
            })
            .transpose()
    }

    /// Parses the requested server id, if any.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - A well-formed id was supplied
    /// - `Ok(None)` - No id filter
    /// - `Err(ValidationError::ServerNotFound)` - The id is an integer outside the range
    ///   of stored ids
    /// - `Err(ValidationError::ServerValue)` - The id is not an integer
    pub fn server_id(&self) -> Result<Option<i32>, ValidationError> {
        let Some(raw) = self.by_serverid.as_deref() else {
            return Ok(None);
        };

        match raw.trim().parse::<i32>() {
            Ok(id) => Ok(Some(id)),
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                Err(ValidationError::ServerNotFound(raw.to_string()))
            }
            Err(_) => Err(ValidationError::ServerValue),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
