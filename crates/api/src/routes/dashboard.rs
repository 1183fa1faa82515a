//! Dashboard endpoint handlers.

use axum::{extract::State, Json};
use domain::models::{DashboardStatistics, LastMonthRevenue, StudentStatusCounts};
use persistence::repositories::DashboardRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/dashboard/students/status
pub async fn student_status(
    State(state): State<AppState>,
) -> Result<Json<StudentStatusCounts>, ApiError> {
    let repo = DashboardRepository::new(state.pool.clone());
    Ok(Json(repo.student_status_counts().await?))
}

/// Sum of paid payments over the trailing month.
///
/// GET /api/v1/dashboard/payments/last-month
pub async fn payments_last_month(
    State(state): State<AppState>,
) -> Result<Json<LastMonthRevenue>, ApiError> {
    let repo = DashboardRepository::new(state.pool.clone());
    let total = repo.revenue_last_month().await?;
    Ok(Json(LastMonthRevenue { total }))
}

/// Student totals plus six months of paid revenue.
///
/// GET /api/v1/dashboard/statistics
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<DashboardStatistics>, ApiError> {
    let repo = DashboardRepository::new(state.pool.clone());
    Ok(Json(repo.statistics().await?))
}
