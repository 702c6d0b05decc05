//! Listener loop with graceful shutdown.

use crate::{routes::router, state::AppState};
use log::{info, warn};
use tokio::net::TcpListener;

/// Serves the API on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let local_addr = listener.local_addr()?;
    info!("event=server_start module=api status=ok addr={local_addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=api status=ok addr={local_addr}");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until the process is killed.
        warn!("event=server_signal module=api status=error error={err}");
        std::future::pending::<()>().await;
    }
}
