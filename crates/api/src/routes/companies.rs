//! Internship host company endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::company::{CompanyRequest, ListCompaniesResponse};
use domain::models::{Company, CompanyResponse};
use persistence::repositories::CompanyRepository;
use tracing::{info, warn};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;

fn to_response(entity: persistence::entities::CompanyEntity) -> CompanyResponse {
    Company::from(entity).into()
}

/// GET /api/v1/companies
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<ListCompaniesResponse>, ApiError> {
    let repo = CompanyRepository::new(state.pool.clone());
    let companies: Vec<CompanyResponse> =
        repo.list().await?.into_iter().map(to_response).collect();
    let total = companies.len();

    Ok(Json(ListCompaniesResponse { companies, total }))
}

/// GET /api/v1/companies/:id
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let repo = CompanyRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Company not found".to_string()))?;

    Ok(Json(to_response(entity)))
}

/// POST /api/v1/companies
pub async fn create_company(
    State(state): State<AppState>,
    AppJson(request): AppJson<CompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    request.validate()?;

    let repo = CompanyRepository::new(state.pool.clone());
    let response = to_response(repo.create(&request).await?);

    info!(company_id = response.id, name = %response.name, "Company created");

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/v1/companies/:id
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<CompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    request.validate()?;

    let repo = CompanyRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Company not found".to_string()))?;

    info!(company_id = id, "Company updated");

    Ok(Json(to_response(entity)))
}

/// Delete a company that hosts no internships.
///
/// DELETE /api/v1/companies/:id
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = CompanyRepository::new(state.pool.clone());

    let internships = repo.count_internships(id).await?;
    if internships > 0 {
        warn!(company_id = id, internships, "Refusing to delete company with internships");
        return Err(ApiError::Conflict(format!(
            "Company has {internships} internship(s) and cannot be deleted"
        )));
    }

    // An internship inserted after the count still trips the foreign key.
    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::from_delete(e, "Company"))?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Company not found".to_string()));
    }

    info!(company_id = id, "Company deleted");

    Ok(StatusCode::NO_CONTENT)
}
