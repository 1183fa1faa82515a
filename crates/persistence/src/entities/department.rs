//! Department entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the departments table.
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentEntity {
    pub id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DepartmentEntity> for domain::models::Department {
    fn from(entity: DepartmentEntity) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
