use crate::server::data::server::{ServerQuery, ServerRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_members;

/// Ids of fetched rows, in order.
fn ids(rows: &[crate::server::model::server::ServerRow]) -> Vec<i32> {
    rows.iter().map(|r| r.server.id).collect()
}
