//! Internship repository for database operations.

use domain::models::internship::{CreateInternshipRequest, UpdateInternshipRequest};
use domain::models::InternshipStatus;
use sqlx::PgPool;

use crate::entities::{InternshipDetailsEntity, InternshipEntity};
use crate::metrics::QueryTimer;

const INTERNSHIP_DETAILS_SELECT: &str = r#"
    SELECT i.id, i.student_id, i.company_id, i.start_date, i.end_date, i.required_hours,
           i.completed_hours, i.status, i.stipend, i.notes, i.created_at, i.updated_at,
           s.name AS student_name,
           c.name AS company_name,
           c.tax_id AS company_tax_id,
           c.phone AS company_phone,
           c.email AS company_email,
           c.address AS company_address,
           c.contact_person AS company_contact_person
    FROM internships i
    JOIN students s ON s.id = i.student_id
    JOIN companies c ON c.id = i.company_id
"#;

const INTERNSHIP_COLUMNS: &str = "id, student_id, company_id, start_date, end_date, required_hours, completed_hours, status, stipend, notes, created_at, updated_at";

/// Repository for internship-related database operations.
#[derive(Clone)]
pub struct InternshipRepository {
    pool: PgPool,
}

impl InternshipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List internships, optionally restricted to one status.
    ///
    /// Ordered by status, then most recent start date first.
    pub async fn list(
        &self,
        status: Option<InternshipStatus>,
    ) -> Result<Vec<InternshipDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_internships");
        let query = format!(
            "{INTERNSHIP_DETAILS_SELECT} WHERE ($1::text IS NULL OR i.status = $1) \
             ORDER BY i.status, i.start_date DESC, i.id DESC"
        );
        let result = sqlx::query_as::<_, InternshipDetailsEntity>(&query)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<InternshipDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_internship_by_id");
        let query = format!("{INTERNSHIP_DETAILS_SELECT} WHERE i.id = $1");
        let result = sqlx::query_as::<_, InternshipDetailsEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        input: &CreateInternshipRequest,
    ) -> Result<InternshipEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_internship");
        let query = format!(
            r#"
            INSERT INTO internships
                (student_id, company_id, start_date, end_date, required_hours,
                 completed_hours, status, stipend, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {INTERNSHIP_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, InternshipEntity>(&query)
            .bind(input.student_id)
            .bind(input.company_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.required_hours)
            .bind(input.completed_hours)
            .bind(input.status.as_str())
            .bind(input.stipend)
            .bind(&input.notes)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Replace every field except the student.
    pub async fn update(
        &self,
        id: i64,
        input: &UpdateInternshipRequest,
    ) -> Result<Option<InternshipEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_internship");
        let query = format!(
            r#"
            UPDATE internships
            SET company_id = $2, start_date = $3, end_date = $4, required_hours = $5,
                completed_hours = $6, status = $7, stipend = $8, notes = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {INTERNSHIP_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, InternshipEntity>(&query)
            .bind(id)
            .bind(input.company_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.required_hours)
            .bind(input.completed_hours)
            .bind(input.status.as_str())
            .bind(input.stipend)
            .bind(&input.notes)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Set the completed hours. Exceeding the required hours violates
    /// `chk_internships_hours`.
    pub async fn update_hours(
        &self,
        id: i64,
        hours: i32,
    ) -> Result<Option<InternshipEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_internship_hours");
        let query = format!(
            r#"
            UPDATE internships
            SET completed_hours = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {INTERNSHIP_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, InternshipEntity>(&query)
            .bind(id)
            .bind(hours)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Mark an internship completed with today's date as its end date.
    ///
    /// Internships starting after today are left untouched and yield `None`,
    /// as do missing ids.
    pub async fn finish(&self, id: i64) -> Result<Option<InternshipEntity>, sqlx::Error> {
        let timer = QueryTimer::new("finish_internship");
        let query = format!(
            r#"
            UPDATE internships
            SET status = 'completed', end_date = CURRENT_DATE, updated_at = NOW()
            WHERE id = $1 AND start_date <= CURRENT_DATE
            RETURNING {INTERNSHIP_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, InternshipEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_internship");
        let result = sqlx::query("DELETE FROM internships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
