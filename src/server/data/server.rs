//! Server data repository and listing query composition.
//!
//! `ServerQuery` is a narrowed view of the server table. Each stage consumes the view and
//! returns a new one, so a listing is built as a local chain of stages and nothing is
//! shared between requests. `ServerRepository::fetch` executes a view.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, RelationTrait, Select,
};
use std::collections::HashMap;

use crate::server::model::server::ServerRow;

const MAX_LIMIT: u64 = i64::MAX as u64;

/// Composable, immutable query over servers ordered by ascending id.
#[derive(Clone, Debug)]
pub struct ServerQuery {
    select: Select<entity::server::Entity>,
    /// Set once `take` has truncated the view; later filters must apply to the page.
    truncated: bool,
    with_num_members: bool,
}

impl Default for ServerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerQuery {
    /// All servers, unfiltered.
    pub fn new() -> Self {
        Self {
            select: entity::prelude::Server::find().order_by_asc(entity::server::Column::Id),
            truncated: false,
            with_num_members: false,
        }
    }

    /// Keeps servers whose category name equals `name` exactly.
    pub fn in_category(self, name: &str) -> Self {
        Self {
            select: self
                .select
                .join(JoinType::InnerJoin, entity::server::Relation::Category.def())
                .filter(entity::category::Column::Name.eq(name)),
            ..self
        }
    }

    /// Keeps servers `user_id` is a member of.
    pub fn with_member(self, user_id: i32) -> Self {
        Self {
            select: self
                .select
                .join(
                    JoinType::InnerJoin,
                    entity::server::Relation::ServerMember.def(),
                )
                .filter(entity::server_member::Column::UserId.eq(user_id)),
            ..self
        }
    }

    /// Attaches the live member count to every fetched server.
    ///
    /// Counts cover the whole membership of each server, not only the rows matched by
    /// `with_member`.
    pub fn with_member_counts(self) -> Self {
        Self {
            with_num_members: true,
            ..self
        }
    }

    /// Keeps at most `qty` servers.
    ///
    /// SQLite binds LIMIT as a signed 64-bit integer, so larger values are clamped.
    pub fn take(self, qty: u64) -> Self {
        Self {
            select: self.select.limit(qty.min(MAX_LIMIT)),
            truncated: true,
            ..self
        }
    }

    /// Keeps the server with `server_id` if it is part of the current view.
    ///
    /// On a truncated view the id is matched against the page's ids through a subquery,
    /// so a server outside the page is not found even though it exists.
    pub fn with_id(self, server_id: i32) -> Self {
        let select = if self.truncated {
            let page = self
                .select
                .select_only()
                .column(entity::server::Column::Id)
                .into_query();

            entity::prelude::Server::find()
                .filter(entity::server::Column::Id.eq(server_id))
                .filter(entity::server::Column::Id.in_subquery(page))
        } else {
            self.select
                .filter(entity::server::Column::Id.eq(server_id))
        };

        Self {
            select,
            truncated: false,
            ..self
        }
    }

    /// Whether fetched rows will carry member counts.
    pub fn annotates_member_counts(&self) -> bool {
        self.with_num_members
    }
}

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Executes a server query.
    ///
    /// Loads the matching servers, then their categories in one query and, when the view
    /// asks for it, their member counts in one grouped query.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerRow>)` - Rows in the view's order
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn fetch(&self, query: ServerQuery) -> Result<Vec<ServerRow>, DbErr> {
        let with_num_members = query.annotates_member_counts();
        let servers = query.select.all(self.db).await?;

        let category_ids: Vec<i32> = servers.iter().map(|s| s.category_id).collect();
        let categories: HashMap<i32, entity::category::Model> = if !category_ids.is_empty() {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        } else {
            HashMap::new()
        };

        let counts = if with_num_members {
            let server_ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
            Some(self.count_members(server_ids).await?)
        } else {
            None
        };

        Ok(servers
            .into_iter()
            .map(|server| ServerRow {
                category: categories.get(&server.category_id).cloned(),
                num_members: counts
                    .as_ref()
                    .map(|c| c.get(&server.id).copied().unwrap_or(0)),
                server,
            })
            .collect())
    }

    /// Counts members per server.
    ///
    /// Servers without members are absent from the map.
    ///
    /// # Returns
    /// - `Ok(HashMap<server_id, count>)` - Member counts
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_members(&self, server_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        if server_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .column_as(entity::server_member::Column::UserId.count(), "num_members")
            .filter(entity::server_member::Column::ServerId.is_in(server_ids))
            .group_by(entity::server_member::Column::ServerId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(server_id, count)| (server_id, count.max(0) as u64))
            .collect())
    }
}
