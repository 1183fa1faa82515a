//! Class section endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::class_section::{ClassSectionRequest, ListClassSectionsResponse};
use domain::models::{ClassSection, ClassSectionDetails};
use persistence::repositories::ClassSectionRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

/// GET /api/v1/classes
pub async fn list_classes(
    State(state): State<AppState>,
) -> Result<Json<ListClassSectionsResponse>, ApiError> {
    let repo = ClassSectionRepository::new(state.pool.clone());
    let classes: Vec<ClassSectionDetails> =
        repo.list().await?.into_iter().map(Into::into).collect();
    let total = classes.len();

    Ok(Json(ListClassSectionsResponse { classes, total }))
}

/// GET /api/v1/classes/:id
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClassSectionDetails>, ApiError> {
    let repo = ClassSectionRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// POST /api/v1/classes
pub async fn create_class(
    State(state): State<AppState>,
    AppJson(request): AppJson<ClassSectionRequest>,
) -> Result<(StatusCode, Json<ClassSection>), ApiError> {
    request.validate()?;

    let repo = ClassSectionRepository::new(state.pool.clone());
    let class_section: ClassSection = repo.create(&request).await?.into();

    info!(
        class_id = class_section.id,
        course_id = class_section.course_id,
        period = %class_section.period,
        "Class created"
    );

    Ok((StatusCode::CREATED, Json(class_section)))
}

/// PUT /api/v1/classes/:id
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<ClassSectionRequest>,
) -> Result<Json<ClassSection>, ApiError> {
    request.validate()?;

    let repo = ClassSectionRepository::new(state.pool.clone());
    let class_section: ClassSection = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?
        .into();

    info!(class_id = id, "Class updated");

    Ok(Json(class_section))
}

/// DELETE /api/v1/classes/:id
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = ClassSectionRepository::new(state.pool.clone());
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Class"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Class not found".to_string()));
    }

    info!(class_id = id, "Class deleted");

    Ok(StatusCode::NO_CONTENT)
}
