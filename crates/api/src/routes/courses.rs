//! Course endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::course::{CourseRequest, ListCoursesResponse};
use domain::models::{Course, CourseDetails};
use persistence::repositories::CourseRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

/// List courses with their department names.
///
/// GET /api/v1/courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<ListCoursesResponse>, ApiError> {
    let repo = CourseRepository::new(state.pool.clone());
    let courses: Vec<CourseDetails> = repo.list().await?.into_iter().map(Into::into).collect();
    let total = courses.len();

    Ok(Json(ListCoursesResponse { courses, total }))
}

/// GET /api/v1/courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseDetails>, ApiError> {
    let repo = CourseRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// POST /api/v1/courses
pub async fn create_course(
    State(state): State<AppState>,
    AppJson(request): AppJson<CourseRequest>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    request.validate()?;

    let repo = CourseRepository::new(state.pool.clone());
    let course: Course = repo.create(&request).await?.into();

    info!(
        course_id = course.id,
        department_id = course.department_id,
        code = %course.code,
        "Course created"
    );

    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/v1/courses/:id
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<CourseRequest>,
) -> Result<Json<Course>, ApiError> {
    request.validate()?;

    let repo = CourseRepository::new(state.pool.clone());
    let course: Course = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?
        .into();

    info!(course_id = id, "Course updated");

    Ok(Json(course))
}

/// DELETE /api/v1/courses/:id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = CourseRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Course"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Course not found".to_string()));
    }

    info!(course_id = id, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}
