use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderName, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::info;

/// Headers attached to every response.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Log `METHOD path`, then answer any `OPTIONS` with an empty 204.
pub async fn log_and_preflight(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri().path());

    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    next.run(request).await
}
