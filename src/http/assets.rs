//! Static page assets served from the configured directory.

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

use super::AppState;

/// A known asset file and the content type it is served with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub file: &'static str,
    pub content_type: &'static str,
}

pub const INDEX: Asset = Asset {
    file: "index.html",
    content_type: "text/html",
};

pub const STYLESHEET: Asset = Asset {
    file: "style.css",
    content_type: "text/css",
};

pub const SCRIPT: Asset = Asset {
    file: "script.js",
    content_type: "application/javascript",
};

/// Read `asset` from `dir`. A read failure is a 500 with a plain-text body.
pub async fn serve_asset(dir: &Path, asset: Asset) -> Response {
    let path = dir.join(asset.file);
    match tokio::fs::read(&path).await {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, asset.content_type)],
            content,
        )
            .into_response(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "error loading asset");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error loading {}", asset.file),
            )
                .into_response()
        }
    }
}

/// `/` and `/index.html`
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    serve_asset(state.static_dir(), INDEX).await
}

/// `/style.css`
pub async fn stylesheet(State(state): State<Arc<AppState>>) -> Response {
    serve_asset(state.static_dir(), STYLESHEET).await
}

/// `/script.js`
pub async fn script(State(state): State<Arc<AppState>>) -> Response {
    serve_asset(state.static_dir(), SCRIPT).await
}
