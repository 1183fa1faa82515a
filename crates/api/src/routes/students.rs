//! Student endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::student::{ListStudentsResponse, StudentRequest};
use domain::models::Student;
use persistence::repositories::StudentRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

/// GET /api/v1/students
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<ListStudentsResponse>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let students: Vec<Student> = repo.list().await?.into_iter().map(Into::into).collect();
    let total = students.len();

    Ok(Json(ListStudentsResponse { students, total }))
}

/// GET /api/v1/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// POST /api/v1/students
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(request): AppJson<StudentRequest>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());
    let student: Student = repo.create(&request).await?.into();

    info!(
        student_id = student.id,
        status = %student.status,
        "Student created"
    );

    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/v1/students/:id
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<StudentRequest>,
) -> Result<Json<Student>, ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());
    let student: Student = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?
        .into();

    info!(student_id = id, status = %student.status, "Student updated");

    Ok(Json(student))
}

/// Delete a student. Fails with 409 while enrollments or internships
/// reference them.
///
/// DELETE /api/v1/students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Student"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    info!(student_id = id, "Student deleted");

    Ok(StatusCode::NO_CONTENT)
}
