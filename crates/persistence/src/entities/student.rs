//! Student entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{Student, StudentStatus};
use sqlx::FromRow;

/// Database row mapping for the students table.
#[derive(Debug, Clone, FromRow)]
pub struct StudentEntity {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub birth_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StudentEntity> for Student {
    fn from(entity: StudentEntity) -> Self {
        // The CHECK constraint keeps stored values within the enum.
        let status = entity
            .status
            .parse::<StudentStatus>()
            .unwrap_or_default();

        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            birth_date: entity.birth_date,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(status: &str) -> StudentEntity {
        StudentEntity {
            id: 1,
            name: "Ana Souza".to_string(),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2001, 4, 12).unwrap(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_student_entity_conversion() {
        let student: Student = entity("locked").into();
        assert_eq!(student.status, StudentStatus::Locked);
        assert_eq!(student.state, "SP");
    }

    #[test]
    fn test_student_entity_unknown_status_falls_back() {
        let student: Student = entity("bogus").into();
        assert_eq!(student.status, StudentStatus::Active);
    }
}
