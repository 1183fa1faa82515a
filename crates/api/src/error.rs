use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    /// Maps a failed DELETE. A foreign key violation there means other rows
    /// still reference the target, which is a conflict rather than a
    /// missing reference.
    pub fn from_delete(err: sqlx::Error, resource: &str) -> Self {
        if database_code(&err).as_deref() == Some("23503") {
            return ApiError::Conflict(format!(
                "{resource} is still referenced by other records"
            ));
        }
        err.into()
    }
}

fn database_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => ApiError::Conflict("Resource already exists".into()),
                Some("23503") => ApiError::NotFound("Referenced resource not found".into()),
                Some("23514") => {
                    let constraint = db_err.constraint().unwrap_or("check");
                    ApiError::Validation(format!("Value violates constraint {constraint}"))
                }
                Some("22003") => ApiError::Validation("Numeric value out of range".into()),
                _ => ApiError::Internal(format!("Database error: {}", db_err)),
            },
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    if *field == "__all__" {
                        message
                    } else {
                        format!("{}: {}", field, message)
                    }
                })
            })
            .collect();
        // HashMap order is unstable; keep messages deterministic.
        messages.sort();

        ApiError::Validation(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1, message = "Must be positive"))]
        count: i32,
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_api_error_not_found() {
        let response = ApiError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_conflict() {
        let response = ApiError::Conflict("in use".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_api_error_validation() {
        let response = ApiError::Validation("invalid input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_error_internal_hides_details() {
        let response = ApiError::Internal("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let json = body_json(ApiError::NotFound("Student not found".into()).into_response()).await;
        assert_eq!(json["error"], "not_found");
        assert_eq!(json["message"], "Student not found");
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::NotFound("test".to_string()).to_string(),
            "Not found: test"
        );
        assert_eq!(
            ApiError::Conflict("test".to_string()).to_string(),
            "Conflict: test"
        );
        assert_eq!(
            ApiError::Validation("test".to_string()).to_string(),
            "Validation error: test"
        );
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Resource not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_from_delete_passes_through_non_database_errors() {
        let error = ApiError::from_delete(sqlx::Error::PoolTimedOut, "Course");
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_from_validation_errors_lists_fields() {
        let sample = Sample {
            name: String::new(),
            count: 0,
        };
        let error: ApiError = sample.validate().unwrap_err().into();
        match error {
            ApiError::Validation(msg) => {
                assert_eq!(msg, "count: Must be positive, name: Name is required");
            }
            _ => panic!("Expected Validation error"),
        }
    }
}
