//! Class section entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{ClassSection, ClassSectionDetails};
use sqlx::FromRow;

/// Database row mapping for the class_sections table.
#[derive(Debug, Clone, FromRow)]
pub struct ClassSectionEntity {
    pub id: i64,
    pub course_id: i64,
    pub semester: i32,
    pub capacity: i32,
    pub period: String,
    pub shift: String,
    pub room: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClassSectionEntity> for ClassSection {
    fn from(entity: ClassSectionEntity) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            semester: entity.semester,
            capacity: entity.capacity,
            period: entity.period,
            shift: entity.shift,
            room: entity.room,
            start_date: entity.start_date,
            end_date: entity.end_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ClassSectionDetailsEntity {
    #[sqlx(flatten)]
    pub class_section: ClassSectionEntity,
    pub course_name: String,
}

impl From<ClassSectionDetailsEntity> for ClassSectionDetails {
    fn from(entity: ClassSectionDetailsEntity) -> Self {
        Self {
            class_section: entity.class_section.into(),
            course_name: entity.course_name,
        }
    }
}
