//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shortcut for
//! default creation. Factories insert directly into the database, so the tables they
//! touch must be part of the `TestBuilder` schema.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::category::create_category(&db).await?;
//!     let server = factory::server::create_server(&db, user.id, category.id).await?;
//!     factory::server_member::create_member(&db, server.id, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let gaming = factory::category::CategoryFactory::new(&db)
//!     .name("Gaming")
//!     .build()
//!     .await?;
//!
//! let server = factory::server::ServerFactory::new(&db, owner.id, gaming.id)
//!     .name("Speedrunners")
//!     .description(Some("Any% only".to_string()))
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;

pub use category::create_category;
pub use server::create_server;
pub use server_member::{create_member, create_members};
pub use user::create_user;
