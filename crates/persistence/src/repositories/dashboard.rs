//! Dashboard aggregate queries.

use domain::models::{
    CashFlow, DashboardStatistics, MonthlyRevenue, StudentStatusCounts,
};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::metrics::QueryTimer;

/// Months of paid revenue shown in the statistics history.
pub const REVENUE_HISTORY_MONTHS: i32 = 6;

/// Repository for dashboard aggregates.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the full statistics block for the dashboard.
    pub async fn statistics(&self) -> Result<DashboardStatistics, sqlx::Error> {
        let ((total_students, student_status), last_month, history) = tokio::try_join!(
            self.student_summary(),
            self.revenue_last_month(),
            self.revenue_history(REVENUE_HISTORY_MONTHS),
        )?;

        Ok(DashboardStatistics {
            total_students,
            student_status,
            cash_flow: CashFlow {
                last_month,
                history,
            },
        })
    }

    /// Count students per status.
    pub async fn student_status_counts(&self) -> Result<StudentStatusCounts, sqlx::Error> {
        let (_, counts) = self.student_summary().await?;
        Ok(counts)
    }

    /// Total and per-status student counts read by one statement, so the
    /// counts always add up to the total.
    async fn student_summary(&self) -> Result<(i64, StudentStatusCounts), sqlx::Error> {
        let timer = QueryTimer::new("dashboard_student_summary");
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) as total,
                COUNT(*) FILTER (WHERE status = 'active') as active,
                COUNT(*) FILTER (WHERE status = 'locked') as locked,
                COUNT(*) FILTER (WHERE status = 'inactive') as inactive
            FROM students
            "#,
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        let row = row?;

        let counts = StudentStatusCounts {
            active: row.get::<i64, _>("active"),
            locked: row.get::<i64, _>("locked"),
            inactive: row.get::<i64, _>("inactive"),
        };
        Ok((row.get::<i64, _>("total"), counts))
    }

    pub async fn total_students(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_total_students");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Sum of paid payments dated within the trailing month.
    pub async fn revenue_last_month(&self) -> Result<Decimal, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_revenue_last_month");
        let result = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM payments
            WHERE status = 'paid' AND payment_date >= NOW() - INTERVAL '1 month'
            "#,
        )
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Paid revenue per calendar month for the last `months` months,
    /// including the current one. Months without payments report zero.
    pub async fn revenue_history(&self, months: i32) -> Result<Vec<MonthlyRevenue>, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_revenue_history");
        let rows = sqlx::query(
            r#"
            SELECT to_char(m.month, 'YYYY-MM') AS month,
                   COALESCE(SUM(p.amount), 0) AS total
            FROM generate_series(
                     date_trunc('month', NOW()) - make_interval(months => $1::int - 1),
                     date_trunc('month', NOW()),
                     INTERVAL '1 month'
                 ) AS m(month)
            LEFT JOIN payments p
                   ON p.status = 'paid'
                  AND date_trunc('month', p.payment_date) = m.month
            GROUP BY m.month
            ORDER BY m.month
            "#,
        )
        .bind(months.max(1))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        let rows = rows?;

        Ok(rows
            .into_iter()
            .map(|row| MonthlyRevenue {
                month: row.get::<String, _>("month"),
                total: row.get::<Decimal, _>("total"),
            })
            .collect())
    }
}
