//! HTTP transport: the student API and the page assets over axum.
//!
//! ## Routes
//!
//! - `GET /students`: list every record.
//! - `POST /students`: create a record.
//! - `PUT /students/:id`: shallow-merge fields onto a record.
//! - `DELETE /students/:id`: remove a record.
//! - `/`, `/index.html`, `/style.css`, `/script.js`: static assets.
//! - `OPTIONS *`: empty 204.
//! - anything else: 404 `Not Found` in plain text.
//!
//! Every response carries permissive CORS headers.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use student_records::{http, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let state = Arc::new(http::AppState::new(&config));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(state.clone());
//!
//! // Or serve directly
//! http::serve(state, config.socket_addr()).await?;
//! ```

mod assets;
mod error;
mod handlers;
mod middleware;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use assets::{serve_asset, Asset, INDEX, SCRIPT, STYLESHEET};
pub use error::{ApiError, Operation};
pub use middleware::CORS_HEADERS;

use crate::config::ServerConfig;
use crate::model::ZeroMarks;
use crate::repository::StudentRepository;
use crate::store::JsonFileStore;

/// Shared state for every handler.
#[derive(Debug)]
pub struct AppState {
    repo: StudentRepository,
    static_dir: PathBuf,
    zero_marks: ZeroMarks,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self::from_parts(
            StudentRepository::new(JsonFileStore::new(&config.data_file)),
            &config.static_dir,
            config.zero_marks(),
        )
    }

    pub fn from_parts(
        repo: StudentRepository,
        static_dir: impl Into<PathBuf>,
        zero_marks: ZeroMarks,
    ) -> Self {
        Self {
            repo,
            static_dir: static_dir.into(),
            zero_marks,
        }
    }

    pub fn repo(&self) -> &StudentRepository {
        &self.repo
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn zero_marks(&self) -> ZeroMarks {
        self.zero_marks
    }
}

/// Build the axum `Router` for the service.
pub fn router(state: Arc<AppState>) -> Router {
    let mut app: Router<Arc<AppState>> = Router::new()
        .route(
            "/students",
            get(handlers::list_students)
                .post(handlers::create_student)
                .fallback(not_found),
        )
        .route(
            "/students/:id",
            put(handlers::update_student)
                .delete(handlers::delete_student)
                .fallback(not_found),
        )
        .route("/", any(assets::index))
        .route("/index.html", any(assets::index))
        .route("/style.css", any(assets::stylesheet))
        .route("/script.js", any(assets::script))
        .fallback(not_found)
        .layer(axum::middleware::from_fn(middleware::log_and_preflight));

    for (name, value) in CORS_HEADERS {
        app = app.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Serve on `addr` until Ctrl+C or SIGTERM.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    info!("Server running at http://localhost:{}/", local.port());
    info!("Use Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Routing miss: plain-text 404.
pub(crate) async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
