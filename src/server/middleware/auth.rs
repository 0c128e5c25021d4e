use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the caller of a request from its session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the authenticated user, failing when there is none.
    ///
    /// # Returns
    /// - `Ok(User)` - Session user exists in the database
    /// - `Err(AuthError::UserNotInSession)` - No user id in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user was deleted
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Returns the authenticated user, if any.
    ///
    /// For endpoints where authentication depends on the request; anonymous callers
    /// and stale sessions both yield `None`.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        match self.require().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
