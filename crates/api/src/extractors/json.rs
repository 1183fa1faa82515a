//! JSON body extractor with API error rejections.
//!
//! `axum::Json` answers malformed bodies with plain-text 400/415/422
//! responses. This wrapper reports them through [`ApiError`] so every
//! client error carries the same `{error, message}` body and status 400.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body.
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: i32,
    }

    fn request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_app_json_accepts_valid_body() {
        let AppJson(payload) = AppJson::<Payload>::from_request(request(r#"{"value": 3}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.value, 3);
    }

    #[tokio::test]
    async fn test_app_json_rejects_wrong_type_as_validation() {
        let result = AppJson::<Payload>::from_request(request(r#"{"value": "x"}"#), &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_app_json_rejects_syntax_error_as_validation() {
        let result = AppJson::<Payload>::from_request(request("{"), &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_app_json_rejects_missing_content_type() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"value": 3}"#))
            .unwrap();
        let result = AppJson::<Payload>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
