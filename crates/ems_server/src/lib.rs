//! HTTP JSON API for the employee management service.
//!
//! Handlers translate requests into `ems_core` service calls; all business
//! rules live in the core crate.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, StartupError};
pub use routes::router;
pub use state::AppState;

use log::info;
use tokio::net::TcpListener;

/// Opens the store, binds the listener and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<(), StartupError> {
    let conn = ems_core::db::open_db(&config.db_path)?;
    let app = router(AppState::new(conn));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=server status=ok addr={} db_path={}",
        listener.local_addr()?,
        config.db_path.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("event=server_signal module=server status=error error={err}");
    }
}
