//! Static dashboard pages.
//!
//! `/` serves the dashboard and `/panel` the control panel, both from
//! `frontend.base_dir`. Other non-API paths fall back to files in the same
//! directory.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::app::AppState;
use crate::error::ApiError;

pub const DASHBOARD_PAGE: &str = "dashboard.html";
pub const PANEL_PAGE: &str = "panel.html";

/// GET /
pub async fn dashboard(State(state): State<AppState>) -> Response {
    serve_page(&state, DASHBOARD_PAGE).await
}

/// GET /panel
pub async fn panel(State(state): State<AppState>) -> Response {
    serve_page(&state, PANEL_PAGE).await
}

/// GET /dashboard.html
pub async fn redirect_dashboard() -> Redirect {
    Redirect::permanent("/")
}

/// GET /index.html
pub async fn redirect_panel() -> Redirect {
    Redirect::permanent("/panel")
}

/// Fallback for unmatched routes: JSON 404 under `/api`, static files
/// elsewhere.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return ApiError::NotFound(format!("No route for {path}")).into_response();
    }
    serve_page(&state, path.trim_start_matches('/')).await
}

async fn serve_page(state: &AppState, relative: &str) -> Response {
    let config = &state.config.frontend;
    if !config.enabled {
        return StatusCode::NOT_FOUND.into_response();
    }

    let base_dir = PathBuf::from(&config.base_dir);
    let file_path = base_dir.join(relative);

    if !is_safe_path(&base_dir, &file_path) {
        warn!(
            requested_path = %file_path.display(),
            "Path traversal attempt detected"
        );
        return StatusCode::FORBIDDEN.into_response();
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&file_path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (
                        header::CACHE_CONTROL,
                        format!("public, max-age={}", config.cache_max_age),
                    ),
                ],
                Body::from(content),
            )
                .into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// True when `path` stays inside `base` once `.` and `..` are resolved.
fn is_safe_path(base: &Path, path: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(base))
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::CurDir => {}
            component => result.push(component),
        }
    }
    result
}
