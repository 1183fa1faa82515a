//! Enrollment endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::enrollment::{EnrollmentRequest, ListEnrollmentsResponse};
use domain::models::{Enrollment, EnrollmentDetails};
use persistence::repositories::EnrollmentRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

/// List enrollments with student, course and class names.
///
/// GET /api/v1/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> Result<Json<ListEnrollmentsResponse>, ApiError> {
    let repo = EnrollmentRepository::new(state.pool.clone());
    let enrollments: Vec<EnrollmentDetails> =
        repo.list().await?.into_iter().map(Into::into).collect();
    let total = enrollments.len();

    Ok(Json(ListEnrollmentsResponse { enrollments, total }))
}

/// GET /api/v1/enrollments/:id
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EnrollmentDetails>, ApiError> {
    let repo = EnrollmentRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Enrollment not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// POST /api/v1/enrollments
pub async fn create_enrollment(
    State(state): State<AppState>,
    AppJson(request): AppJson<EnrollmentRequest>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    request.validate()?;

    let repo = EnrollmentRepository::new(state.pool.clone());
    let enrollment: Enrollment = repo.create(&request).await?.into();

    info!(
        enrollment_id = enrollment.id,
        student_id = enrollment.student_id,
        class_id = enrollment.class_id,
        "Enrollment created"
    );

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// PUT /api/v1/enrollments/:id
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<EnrollmentRequest>,
) -> Result<Json<Enrollment>, ApiError> {
    request.validate()?;

    let repo = EnrollmentRepository::new(state.pool.clone());
    let enrollment: Enrollment = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Enrollment not found".to_string()))?
        .into();

    info!(enrollment_id = id, status = %enrollment.status, "Enrollment updated");

    Ok(Json(enrollment))
}

/// DELETE /api/v1/enrollments/:id
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = EnrollmentRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Enrollment"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Enrollment not found".to_string()));
    }

    info!(enrollment_id = id, "Enrollment deleted");

    Ok(StatusCode::NO_CONTENT)
}
