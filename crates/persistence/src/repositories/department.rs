//! Department repository for database operations.

use sqlx::PgPool;

use crate::entities::DepartmentEntity;
use crate::metrics::QueryTimer;

/// Repository for department-related database operations.
#[derive(Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Creates a new DepartmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all departments ordered by description.
    pub async fn list(&self) -> Result<Vec<DepartmentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_departments");
        let result = sqlx::query_as::<_, DepartmentEntity>(
            r#"
            SELECT id, description, created_at, updated_at
            FROM departments
            ORDER BY description
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DepartmentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_department_by_id");
        let result = sqlx::query_as::<_, DepartmentEntity>(
            r#"
            SELECT id, description, created_at, updated_at
            FROM departments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(&self, description: &str) -> Result<DepartmentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_department");
        let result = sqlx::query_as::<_, DepartmentEntity>(
            r#"
            INSERT INTO departments (description)
            VALUES ($1)
            RETURNING id, description, created_at, updated_at
            "#,
        )
        .bind(description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replace a department's description. Returns `None` when the id is unknown.
    pub async fn update(
        &self,
        id: i64,
        description: &str,
    ) -> Result<Option<DepartmentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_department");
        let result = sqlx::query_as::<_, DepartmentEntity>(
            r#"
            UPDATE departments
            SET description = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(description)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a department.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_department");
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
