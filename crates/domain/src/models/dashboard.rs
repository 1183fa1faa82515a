//! Dashboard aggregates.

use rust_decimal::Decimal;
use serde::Serialize;

use super::StudentStatus;

/// Number of students in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StudentStatusCounts {
    pub active: i64,
    pub locked: i64,
    pub inactive: i64,
}

impl StudentStatusCounts {
    /// Builds counts from `(status, count)` rows. Statuses with no rows stay 0.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (StudentStatus, i64)>,
    {
        let mut counts = Self::default();
        for (status, count) in rows {
            match status {
                StudentStatus::Active => counts.active += count,
                StudentStatus::Locked => counts.locked += count,
                StudentStatus::Inactive => counts.inactive += count,
            }
        }
        counts
    }

    pub fn total(&self) -> i64 {
        self.active + self.locked + self.inactive
    }
}

/// Paid revenue for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`
    pub month: String,
    pub total: Decimal,
}

/// Sum of paid payments over the trailing month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastMonthRevenue {
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlow {
    pub last_month: Decimal,
    /// Oldest month first.
    pub history: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStatistics {
    pub total_students: i64,
    pub student_status: StudentStatusCounts,
    pub cash_flow: CashFlow,
}
