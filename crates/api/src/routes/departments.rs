//! Department endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::department::{DepartmentRequest, ListDepartmentsResponse};
use domain::models::Department;
use persistence::repositories::DepartmentRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

/// List all departments.
///
/// GET /api/v1/departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<ListDepartmentsResponse>, ApiError> {
    let repo = DepartmentRepository::new(state.pool.clone());
    let departments: Vec<Department> = repo.list().await?.into_iter().map(Into::into).collect();
    let total = departments.len();

    Ok(Json(ListDepartmentsResponse { departments, total }))
}

/// GET /api/v1/departments/:id
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Department>, ApiError> {
    let repo = DepartmentRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Department not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// POST /api/v1/departments
pub async fn create_department(
    State(state): State<AppState>,
    AppJson(request): AppJson<DepartmentRequest>,
) -> Result<(StatusCode, Json<Department>), ApiError> {
    request.validate()?;

    let repo = DepartmentRepository::new(state.pool.clone());
    let department: Department = repo.create(&request.description).await?.into();

    info!(department_id = department.id, "Department created");

    Ok((StatusCode::CREATED, Json(department)))
}

/// PUT /api/v1/departments/:id
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<DepartmentRequest>,
) -> Result<Json<Department>, ApiError> {
    request.validate()?;

    let repo = DepartmentRepository::new(state.pool.clone());
    let department: Department = repo
        .update(id, &request.description)
        .await?
        .ok_or_else(|| ApiError::NotFound("Department not found".to_string()))?
        .into();

    info!(department_id = id, "Department updated");

    Ok(Json(department))
}

/// Delete a department. Fails with 409 while courses belong to it.
///
/// DELETE /api/v1/departments/:id
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = DepartmentRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Department"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Department not found".to_string()));
    }

    info!(department_id = id, "Department deleted");

    Ok(StatusCode::NO_CONTENT)
}
