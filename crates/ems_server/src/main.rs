//! `ems-server` entry point.

use clap::Parser;
use ems_server::{serve, ServerConfig};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::parse();
    if let Err(err) = config.init_logging() {
        eprintln!("ems-server: logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    match serve(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=server_start module=server status=error error={err}");
            eprintln!("ems-server: {err}");
            ExitCode::FAILURE
        }
    }
}
