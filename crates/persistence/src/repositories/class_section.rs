//! Class section repository for database operations.

use domain::models::class_section::ClassSectionRequest;
use sqlx::PgPool;

use crate::entities::{ClassSectionDetailsEntity, ClassSectionEntity};
use crate::metrics::QueryTimer;

const CLASS_DETAILS_SELECT: &str = r#"
    SELECT t.id, t.course_id, t.semester, t.capacity, t.period, t.shift, t.room,
           t.start_date, t.end_date, t.created_at, t.updated_at,
           c.description AS course_name
    FROM class_sections t
    JOIN courses c ON c.id = t.course_id
"#;

const CLASS_COLUMNS: &str =
    "id, course_id, semester, capacity, period, shift, room, start_date, end_date, created_at, updated_at";

/// Repository for class section database operations.
#[derive(Clone)]
pub struct ClassSectionRepository {
    pool: PgPool,
}

impl ClassSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List class sections ordered by course then period.
    pub async fn list(&self) -> Result<Vec<ClassSectionDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_class_sections");
        let query = format!("{CLASS_DETAILS_SELECT} ORDER BY c.description, t.period");
        let result = sqlx::query_as::<_, ClassSectionDetailsEntity>(&query)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<ClassSectionDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_class_section_by_id");
        let query = format!("{CLASS_DETAILS_SELECT} WHERE t.id = $1");
        let result = sqlx::query_as::<_, ClassSectionDetailsEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        input: &ClassSectionRequest,
    ) -> Result<ClassSectionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_class_section");
        let query = format!(
            r#"
            INSERT INTO class_sections
                (course_id, semester, capacity, period, shift, room, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {CLASS_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, ClassSectionEntity>(&query)
            .bind(input.course_id)
            .bind(input.semester)
            .bind(input.capacity)
            .bind(&input.period)
            .bind(&input.shift)
            .bind(&input.room)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        input: &ClassSectionRequest,
    ) -> Result<Option<ClassSectionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_class_section");
        let query = format!(
            r#"
            UPDATE class_sections
            SET course_id = $2, semester = $3, capacity = $4, period = $5, shift = $6,
                room = $7, start_date = $8, end_date = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING {CLASS_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, ClassSectionEntity>(&query)
            .bind(id)
            .bind(input.course_id)
            .bind(input.semester)
            .bind(input.capacity)
            .bind(&input.period)
            .bind(&input.shift)
            .bind(&input.room)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_class_section");
        let result = sqlx::query("DELETE FROM class_sections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
