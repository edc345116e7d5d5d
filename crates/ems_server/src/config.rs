//! Server configuration from command-line flags and environment.

use clap::Parser;
use ems_core::{default_log_level, init_logging, init_stderr_logging};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DB_PATH: &str = "ems.db";

/// Runtime configuration for `ems-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "ems-server", version, about = "Employee management HTTP API")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long = "bind", env = "EMS_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: SocketAddr,

    /// SQLite database file; created on first start.
    #[arg(long, env = "EMS_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// One of trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "EMS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, env = "EMS_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl ServerConfig {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Starts process logging for the configured level and target.
    pub fn init_logging(&self) -> Result<(), String> {
        match self.log_dir.as_deref() {
            Some(dir) => init_logging(self.log_level(), dir),
            None => init_stderr_logging(self.log_level()),
        }
    }
}
