use axum::http::{HeaderValue, Method};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's SQLite database.
///
/// Sessions are stored in the same database as application data and expire after seven
/// days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the CORS layer when a cross-origin client is configured.
///
/// # Returns
/// - `Ok(Some(CorsLayer))` - Allows `GET` with credentials from the configured origin
/// - `Ok(None)` - No origin configured
/// - `Err(AppError::ConfigErr)` - Origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<Option<CorsLayer>, AppError> {
    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(None);
    };

    let origin = origin.parse::<HeaderValue>().map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.clone(),
    })?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET])
            .allow_credentials(true),
    ))
}
