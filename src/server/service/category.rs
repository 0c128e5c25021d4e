use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository, error::AppError, model::category::Category,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
