//! User service.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::User,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user authenticated by `session`.
    ///
    /// # Returns
    /// - `Ok(User)` - The session's user
    /// - `Err(AppError::AuthErr)` - Session is anonymous or stale
    pub async fn get_session_user(&self, session: &Session) -> Result<User, AppError> {
        AuthGuard::new(self.db, session).require().await
    }

    /// Ends the session's authentication.
    pub async fn logout(&self, session: &Session) {
        AuthSession::new(session).clear().await;
    }
}
