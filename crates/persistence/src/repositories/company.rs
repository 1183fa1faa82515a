//! Company repository for database operations.

use domain::models::company::CompanyRequest;
use sqlx::PgPool;

use crate::entities::CompanyEntity;
use crate::metrics::QueryTimer;

/// Repository for internship host companies.
#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List companies ordered by name.
    pub async fn list(&self) -> Result<Vec<CompanyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_companies");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            SELECT id, name, tax_id, address, phone, email, contact_person, created_at, updated_at
            FROM companies
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<CompanyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_company_by_id");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            SELECT id, name, tax_id, address, phone, email, contact_person, created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a company, storing tax id and phone as digits only.
    pub async fn create(&self, input: &CompanyRequest) -> Result<CompanyEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_company");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            INSERT INTO companies (name, tax_id, address, phone, email, contact_person)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, tax_id, address, phone, email, contact_person, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.normalized_tax_id())
        .bind(input.address.as_deref())
        .bind(input.normalized_phone())
        .bind(input.email.as_deref())
        .bind(input.contact_person.as_deref())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        input: &CompanyRequest,
    ) -> Result<Option<CompanyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_company");
        let result = sqlx::query_as::<_, CompanyEntity>(
            r#"
            UPDATE companies
            SET name = $2, tax_id = $3, address = $4, phone = $5, email = $6,
                contact_person = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, tax_id, address, phone, email, contact_person, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.normalized_tax_id())
        .bind(input.address.as_deref())
        .bind(input.normalized_phone())
        .bind(input.email.as_deref())
        .bind(input.contact_person.as_deref())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Number of internships hosted by a company, in any status.
    pub async fn count_internships(&self, id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_company_internships");
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM internships WHERE company_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_company");
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
