//! Enrollment repository for database operations.

use domain::models::enrollment::EnrollmentRequest;
use sqlx::PgPool;

use crate::entities::{EnrollmentDetailsEntity, EnrollmentEntity};
use crate::metrics::QueryTimer;

const ENROLLMENT_DETAILS_SELECT: &str = r#"
    SELECT e.id, e.student_id, e.class_id, e.enrollment_date, e.status, e.notes,
           e.created_at, e.updated_at,
           s.name AS student_name,
           c.description AS course_name,
           t.period AS class_period
    FROM enrollments e
    JOIN students s ON s.id = e.student_id
    JOIN class_sections t ON t.id = e.class_id
    JOIN courses c ON c.id = t.course_id
"#;

/// Repository for enrollment-related database operations.
#[derive(Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List enrollments, newest enrollment date first.
    pub async fn list(&self) -> Result<Vec<EnrollmentDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_enrollments");
        let query = format!("{ENROLLMENT_DETAILS_SELECT} ORDER BY e.enrollment_date DESC, e.id DESC");
        let result = sqlx::query_as::<_, EnrollmentDetailsEntity>(&query)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<EnrollmentDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_enrollment_by_id");
        let query = format!("{ENROLLMENT_DETAILS_SELECT} WHERE e.id = $1");
        let result = sqlx::query_as::<_, EnrollmentDetailsEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(&self, input: &EnrollmentRequest) -> Result<EnrollmentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_enrollment");
        let result = sqlx::query_as::<_, EnrollmentEntity>(
            r#"
            INSERT INTO enrollments (student_id, class_id, enrollment_date, status, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, student_id, class_id, enrollment_date, status, notes,
                      created_at, updated_at
            "#,
        )
        .bind(input.student_id)
        .bind(input.class_id)
        .bind(input.effective_date())
        .bind(input.status.as_str())
        .bind(input.notes.as_deref())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        input: &EnrollmentRequest,
    ) -> Result<Option<EnrollmentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_enrollment");
        let result = sqlx::query_as::<_, EnrollmentEntity>(
            r#"
            UPDATE enrollments
            SET student_id = $2, class_id = $3, enrollment_date = $4, status = $5,
                notes = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING id, student_id, class_id, enrollment_date, status, notes,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(input.student_id)
        .bind(input.class_id)
        .bind(input.effective_date())
        .bind(input.status.as_str())
        .bind(input.notes.as_deref())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_enrollment");
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
