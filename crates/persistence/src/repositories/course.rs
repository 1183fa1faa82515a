//! Course repository for database operations.

use domain::models::course::CourseRequest;
use sqlx::PgPool;

use crate::entities::{CourseDetailsEntity, CourseEntity};
use crate::metrics::QueryTimer;

const COURSE_DETAILS_SELECT: &str = r#"
    SELECT c.id, c.department_id, c.description, c.code, c.tuition, c.duration_semesters,
           c.created_at, c.updated_at, d.description AS department_name
    FROM courses c
    JOIN departments d ON d.id = c.department_id
"#;

/// Repository for course-related database operations.
#[derive(Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List courses with their department, ordered by department then course.
    pub async fn list(&self) -> Result<Vec<CourseDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_courses");
        let query = format!("{COURSE_DETAILS_SELECT} ORDER BY d.description, c.description");
        let result = sqlx::query_as::<_, CourseDetailsEntity>(&query)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<CourseDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_course_by_id");
        let query = format!("{COURSE_DETAILS_SELECT} WHERE c.id = $1");
        let result = sqlx::query_as::<_, CourseDetailsEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(&self, input: &CourseRequest) -> Result<CourseEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_course");
        let result = sqlx::query_as::<_, CourseEntity>(
            r#"
            INSERT INTO courses (department_id, description, code, tuition, duration_semesters)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, department_id, description, code, tuition, duration_semesters,
                      created_at, updated_at
            "#,
        )
        .bind(input.department_id)
        .bind(&input.description)
        .bind(&input.code)
        .bind(input.tuition)
        .bind(input.duration_semesters)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        input: &CourseRequest,
    ) -> Result<Option<CourseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_course");
        let result = sqlx::query_as::<_, CourseEntity>(
            r#"
            UPDATE courses
            SET department_id = $2, description = $3, code = $4, tuition = $5,
                duration_semesters = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING id, department_id, description, code, tuition, duration_semesters,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(input.department_id)
        .bind(&input.description)
        .bind(&input.code)
        .bind(input.tuition)
        .bind(input.duration_semesters)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_course");
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
