//! Test support for the server directory.
//!
//! Every test gets its own in-memory SQLite database. `TestBuilder::with_server_tables`
//! creates the user, category, server and membership tables in foreign key order, and
//! `TestContext::session` adds a session stored in that same database, so handlers can
//! be called with the session a logged in request would carry.
//!
//! ```rust,ignore
//! let mut test = TestBuilder::new().with_server_tables().build().await?;
//! let (db, session) = test.db_and_session().await?;
//!
//! let (owner, category, server) = factory::helpers::create_server_with_dependencies(db).await?;
//! factory::server_member::create_members(db, server.id, 3).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
