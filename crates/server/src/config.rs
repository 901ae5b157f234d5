//! Server configuration from the environment.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Runtime configuration for the static server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built frontend bundle.
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    /// Read `PORT` and `DIST_DIR`, falling back to the defaults when unset.
    /// A `PORT` that does not parse is logged and ignored rather than
    /// aborting startup.
    pub fn from_env() -> Self {
        let port = parse_port(std::env::var("PORT").ok());
        let dist_dir = std::env::var("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DIST_DIR));

        Self { port, dist_dir }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        Some(value) => match value.parse() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!("PORT={value} is not a valid port; using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        },
        None => DEFAULT_PORT,
    }
}
