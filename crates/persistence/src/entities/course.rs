//! Course entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Course, CourseDetails};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database row mapping for the courses table.
#[derive(Debug, Clone, FromRow)]
pub struct CourseEntity {
    pub id: i64,
    pub department_id: i64,
    pub description: String,
    pub code: String,
    pub tuition: Decimal,
    pub duration_semesters: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CourseEntity> for Course {
    fn from(entity: CourseEntity) -> Self {
        Self {
            id: entity.id,
            department_id: entity.department_id,
            description: entity.description,
            code: entity.code,
            tuition: entity.tuition,
            duration_semesters: entity.duration_semesters,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Course row joined with its department's description.
#[derive(Debug, Clone, FromRow)]
pub struct CourseDetailsEntity {
    #[sqlx(flatten)]
    pub course: CourseEntity,
    pub department_name: String,
}

impl From<CourseDetailsEntity> for CourseDetails {
    fn from(entity: CourseDetailsEntity) -> Self {
        Self {
            course: entity.course.into(),
            department_name: entity.department_name,
        }
    }
}
