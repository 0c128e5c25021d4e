//! Category data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::category::Category;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }
}
