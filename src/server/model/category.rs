//! Category domain model.

use crate::model::category::CategoryDto;

/// Named grouping of servers. The name is what the server listing filters on.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}
