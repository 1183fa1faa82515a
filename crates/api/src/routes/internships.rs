//! Internship endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::internship::{
    CreateInternshipRequest, ListInternshipsQuery, ListInternshipsResponse, UpdateHoursRequest,
    UpdateInternshipRequest,
};
use domain::models::{Internship, InternshipDetails, InternshipResponse};
use persistence::repositories::InternshipRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

fn not_found() -> ApiError {
    ApiError::NotFound("Internship not found".to_string())
}

/// List internships, optionally filtered by status.
///
/// GET /api/v1/internships?status=in_progress
pub async fn list_internships(
    State(state): State<AppState>,
    Query(query): Query<ListInternshipsQuery>,
) -> Result<Json<ListInternshipsResponse>, ApiError> {
    let repo = InternshipRepository::new(state.pool.clone());
    let internships: Vec<InternshipResponse> = repo
        .list(query.status)
        .await?
        .into_iter()
        .map(|e| InternshipDetails::from(e).into())
        .collect();
    let total = internships.len();

    Ok(Json(ListInternshipsResponse { internships, total }))
}

/// Internship with student and full company contact details.
///
/// GET /api/v1/internships/:id
pub async fn get_internship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InternshipResponse>, ApiError> {
    let repo = InternshipRepository::new(state.pool.clone());
    let entity = repo.find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(InternshipDetails::from(entity).into()))
}

/// POST /api/v1/internships
pub async fn create_internship(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateInternshipRequest>,
) -> Result<(StatusCode, Json<InternshipResponse>), ApiError> {
    request.validate()?;

    let repo = InternshipRepository::new(state.pool.clone());
    let internship: Internship = repo.create(&request).await?.into();

    info!(
        internship_id = internship.id,
        student_id = internship.student_id,
        company_id = internship.company_id,
        "Internship created"
    );

    Ok((StatusCode::CREATED, Json(internship.into())))
}

/// PUT /api/v1/internships/:id
pub async fn update_internship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<UpdateInternshipRequest>,
) -> Result<Json<InternshipResponse>, ApiError> {
    request.validate()?;

    let repo = InternshipRepository::new(state.pool.clone());
    let internship: Internship = repo
        .update(id, &request)
        .await?
        .ok_or_else(not_found)?
        .into();

    info!(internship_id = id, status = %internship.status, "Internship updated");

    Ok(Json(internship.into()))
}

/// Set the completed hours.
///
/// PATCH /api/v1/internships/:id/hours
pub async fn update_internship_hours(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<UpdateHoursRequest>,
) -> Result<Json<InternshipResponse>, ApiError> {
    request.validate()?;

    let repo = InternshipRepository::new(state.pool.clone());
    let internship: Internship = repo
        .update_hours(id, request.hours)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Validation(_) => ApiError::Validation(
                "Completed hours cannot exceed required hours".to_string(),
            ),
            other => other,
        })?
        .ok_or_else(not_found)?
        .into();

    info!(
        internship_id = id,
        completed_hours = internship.completed_hours,
        progress_percent = internship.progress_percent(),
        "Internship hours updated"
    );

    Ok(Json(internship.into()))
}

/// Mark an internship completed as of today. Refused with 409 while the
/// start date is still in the future.
///
/// POST /api/v1/internships/:id/finish
pub async fn finish_internship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InternshipResponse>, ApiError> {
    let repo = InternshipRepository::new(state.pool.clone());
    let internship: Internship = match repo.finish(id).await? {
        Some(entity) => entity.into(),
        None if repo.find_by_id(id).await?.is_some() => {
            return Err(ApiError::Conflict(
                "Internship has not started yet".to_string(),
            ));
        }
        None => return Err(not_found()),
    };

    info!(internship_id = id, "Internship finished");

    Ok(Json(internship.into()))
}

/// DELETE /api/v1/internships/:id
pub async fn delete_internship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = InternshipRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Internship"))?;

    if deleted == 0 {
        return Err(not_found());
    }

    info!(internship_id = id, "Internship deleted");

    Ok(StatusCode::NO_CONTENT)
}
