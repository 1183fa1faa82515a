//! Student repository for database operations.

use domain::models::student::StudentRequest;
use sqlx::PgPool;

use crate::entities::StudentEntity;
use crate::metrics::QueryTimer;

/// Repository for student-related database operations.
#[derive(Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all students ordered by name.
    pub async fn list(&self) -> Result<Vec<StudentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_students");
        let result = sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, name, city, state, birth_date, status, created_at, updated_at
            FROM students
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<StudentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_student_by_id");
        let result = sqlx::query_as::<_, StudentEntity>(
            r#"
            SELECT id, name, city, state, birth_date, status, created_at, updated_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(&self, input: &StudentRequest) -> Result<StudentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_student");
        let result = sqlx::query_as::<_, StudentEntity>(
            r#"
            INSERT INTO students (name, city, state, birth_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, city, state, birth_date, status, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(input.birth_date)
        .bind(input.status.as_str())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        input: &StudentRequest,
    ) -> Result<Option<StudentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_student");
        let result = sqlx::query_as::<_, StudentEntity>(
            r#"
            UPDATE students
            SET name = $2, city = $3, state = $4, birth_date = $5, status = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, city, state, birth_date, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(input.birth_date)
        .bind(input.status.as_str())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_student");
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
