//! Enrollment entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{Enrollment, EnrollmentDetails, EnrollmentStatus};
use sqlx::FromRow;

/// Database row mapping for the enrollments table.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentEntity {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub enrollment_date: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnrollmentEntity> for Enrollment {
    fn from(entity: EnrollmentEntity) -> Self {
        let status = entity
            .status
            .parse::<EnrollmentStatus>()
            .unwrap_or_default();

        Self {
            id: entity.id,
            student_id: entity.student_id,
            class_id: entity.class_id,
            enrollment_date: entity.enrollment_date,
            status,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Enrollment row joined with student, course and class columns.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentDetailsEntity {
    #[sqlx(flatten)]
    pub enrollment: EnrollmentEntity,
    pub student_name: String,
    pub course_name: String,
    pub class_period: String,
}

impl From<EnrollmentDetailsEntity> for EnrollmentDetails {
    fn from(entity: EnrollmentDetailsEntity) -> Self {
        Self {
            enrollment: entity.enrollment.into(),
            student_name: entity.student_name,
            course_name: entity.course_name,
            class_period: entity.class_period,
        }
    }
}
