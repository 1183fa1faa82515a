//! Company entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the companies table.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyEntity {
    pub id: i64,
    pub name: String,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyEntity> for domain::models::Company {
    fn from(entity: CompanyEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tax_id: entity.tax_id,
            address: entity.address,
            phone: entity.phone,
            email: entity.email,
            contact_person: entity.contact_person,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
