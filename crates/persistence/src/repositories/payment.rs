//! Payment repository for database operations.

use domain::models::payment::{CreatePaymentRequest, UpdatePaymentRequest};
use sqlx::PgPool;

use crate::entities::{PaymentDetailsEntity, PaymentEntity};
use crate::metrics::QueryTimer;

const PAYMENT_DETAILS_SELECT: &str = r#"
    SELECT p.id, p.enrollment_id, p.amount, p.payment_type, p.reference_period, p.status,
           p.payment_date, p.created_at, p.updated_at,
           s.id AS student_id,
           s.name AS student_name,
           c.description AS course_name
    FROM payments p
    JOIN enrollments e ON e.id = p.enrollment_id
    JOIN students s ON s.id = e.student_id
    JOIN class_sections t ON t.id = e.class_id
    JOIN courses c ON c.id = t.course_id
"#;

const PAYMENT_COLUMNS: &str = "id, enrollment_id, amount, payment_type, reference_period, status, payment_date, created_at, updated_at";

/// Repository for payment-related database operations.
#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List payments, most recent payment date first.
    pub async fn list(&self) -> Result<Vec<PaymentDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_payments");
        let query = format!("{PAYMENT_DETAILS_SELECT} ORDER BY p.payment_date DESC, p.id DESC");
        let result = sqlx::query_as::<_, PaymentDetailsEntity>(&query)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<PaymentDetailsEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_payment_by_id");
        let query = format!("{PAYMENT_DETAILS_SELECT} WHERE p.id = $1");
        let result = sqlx::query_as::<_, PaymentDetailsEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Record a payment. The payment date is set by the database.
    pub async fn create(&self, input: &CreatePaymentRequest) -> Result<PaymentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_payment");
        let query = format!(
            r#"
            INSERT INTO payments (enrollment_id, amount, payment_type, reference_period, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PAYMENT_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, PaymentEntity>(&query)
            .bind(input.enrollment_id)
            .bind(input.amount)
            .bind(&input.payment_type)
            .bind(&input.reference_period)
            .bind(input.status.as_str())
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    pub async fn update(
        &self,
        id: i64,
        input: &UpdatePaymentRequest,
    ) -> Result<Option<PaymentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_payment");
        let query = format!(
            r#"
            UPDATE payments
            SET amount = $2, payment_type = $3, reference_period = $4, status = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PAYMENT_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, PaymentEntity>(&query)
            .bind(id)
            .bind(input.amount)
            .bind(&input.payment_type)
            .bind(&input.reference_period)
            .bind(input.status.as_str())
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_payment");
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }
}
