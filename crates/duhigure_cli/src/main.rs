//! Server entry point.
//!
//! # Responsibility
//! - Resolve configuration from the environment.
//! - Initialize logging before any other work so failures are recorded.
//! - Open the migrated database and serve the HTTP API.

use duhigure_api::{serve, AppState};
use duhigure_core::db::open_db;
use duhigure_core::{init_console_logging, init_logging, AppConfig};
use log::{error, info};
use std::error::Error;
use std::process::ExitCode;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("duhigure: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    match config.log_dir.as_deref() {
        Some(dir) => init_logging(&config.log_level, &dir.to_string_lossy())?,
        None => init_console_logging(&config.log_level)?,
    }
    info!(
        "event=app_config module=cli status=ok db_path={} bind={} version={}",
        config.db_path.display(),
        config.bind_addr,
        duhigure_core::core_version()
    );

    let conn = open_db(&config.db_path)?;
    let state = AppState::new(conn, config.default_sector.clone());
    let listener = TcpListener::bind(config.bind_addr).await?;
    serve(listener, state).await?;
    Ok(())
}
