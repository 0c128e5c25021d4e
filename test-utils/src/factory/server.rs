//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// Owner and category are required because both are non-null foreign keys.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, owner.id, category.id)
///     .name("Speedrunners")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    category_id: i32,
    name: String,
    description: Option<String>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {n}"` where n is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, category_id: i32) -> Self {
        Self {
            db,
            owner_id,
            category_id,
            name: format!("Server {}", next_id()),
            description: None,
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the server description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            owner_id: ActiveValue::Set(self.owner_id),
            category_id: ActiveValue::Set(self.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values for the given owner and category.
pub async fn create_server(
    db: &DatabaseConnection,
    owner_id: i32,
    category_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, owner_id, category_id).build().await
}
