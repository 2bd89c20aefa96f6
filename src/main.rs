use std::sync::Arc;

use clap::Parser;
use student_records::http::{self, AppState};
use student_records::{telemetry, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    telemetry::init(config.log_format)?;

    info!(
        data_file = %config.data_file.display(),
        static_dir = %config.static_dir.display(),
        zero_marks = %config.zero_marks(),
        "Starting student record service"
    );

    let state = Arc::new(AppState::new(&config));
    http::serve(state, config.socket_addr()).await?;

    Ok(())
}
