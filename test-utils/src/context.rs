use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment backed by an in-memory SQLite database.
///
/// Both the connection and the session are created on first use and live as long as
/// the context. The session is stored in the same database as the application tables,
/// matching how the server wires its session layer at startup.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, set by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the in-memory store, set by `session()`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a context with neither database nor session initialized.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the in-memory database
    /// - `Err(TestError::Database)` - Failed to open the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        match self.db.as_ref() {
            Some(db) => Ok(db),
            None => Err(sea_orm::DbErr::Custom("test database missing".to_string()).into()),
        }
    }

    /// Executes CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; tables referencing others must come after them.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table on first call.
    ///
    /// Sessions expire after seven days of inactivity, same as the server's layer.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    ///
    /// session.insert("auth:user", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            let session = Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            );
            self.session = Some(session);
        }

        match self.session.as_ref() {
            Some(session) => Ok(session),
            None => Err(sea_orm::DbErr::Custom("test session missing".to_string()).into()),
        }
    }

    /// Returns both the database and the session.
    ///
    /// Avoids holding a mutable borrow from `database()` while calling `session()`.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}
