//! Server listing service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::{ServerQuery, ServerRepository},
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::{
        server::{Server, ServerListQuery},
        user::User,
    },
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching every filter of `query`.
    ///
    /// Stages run in a fixed order, each narrowing the previous view:
    /// 1. category
    /// 2. membership of `caller` (`by_user`)
    /// 3. member count annotation
    /// 4. truncation to `qty`
    /// 5. server id, applied to the truncated page
    ///
    /// # Arguments
    /// - `query` - Parsed listing parameters
    /// - `caller` - Authenticated user of the request, if any
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers ordered by id
    /// - `Err(AppError::AuthErr(AuthenticationFailed))` - `by_user` or `by_serverid` was
    ///   requested without an authenticated caller
    /// - `Err(AppError::ValidationErr(QuantityValue))` - `qty` is not a non-negative integer
    /// - `Err(AppError::ValidationErr(ServerValue))` - `by_serverid` is not an integer
    /// - `Err(AppError::ValidationErr(ServerNotFound))` - `by_serverid` matched nothing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        query: ServerListQuery,
        caller: Option<User>,
    ) -> Result<Vec<Server>, AppError> {
        if caller.is_none() && query.requires_authentication() {
            return Err(AuthError::AuthenticationFailed(format!(
                "anonymous server listing with by_user={} by_serverid={:?}",
                query.by_user, query.by_serverid
            ))
            .into());
        }

        tracing::debug!("Listing servers with {:?}", query);

        let view = ServerQuery::new();

        let view = match query.category.as_deref() {
            Some(category) => view.in_category(category),
            None => view,
        };

        let view = match (query.by_user, &caller) {
            (true, Some(user)) => view.with_member(user.id),
            _ => view,
        };

        let view = if query.with_num_members {
            view.with_member_counts()
        } else {
            view
        };

        let view = match query.quantity()? {
            Some(qty) => view.take(qty),
            None => view,
        };

        let server_id = query.server_id()?;
        let view = match server_id {
            Some(id) => view.with_id(id),
            None => view,
        };

        let rows = ServerRepository::new(self.db).fetch(view).await?;

        if let (Some(raw_id), true) = (&query.by_serverid, rows.is_empty()) {
            return Err(ValidationError::ServerNotFound(raw_id.clone()).into());
        }

        rows.into_iter().map(Server::from_row).collect()
    }
}
