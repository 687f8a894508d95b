//! Process configuration.
//!
//! Values come from the environment, optionally seeded from a `.env` file
//! in the working directory. Every key has a default, so a bare
//! `qiskit-api` invocation starts a usable server.

use anyhow::Context;
use std::path::{Path, PathBuf};

pub const HOST_VAR: &str = "QISKIT_API_HOST";
pub const PORT_VAR: &str = "QISKIT_API_PORT";
pub const LOG_DIR_VAR: &str = "QISKIT_API_LOG_DIR";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        skip_missing(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|v| !v.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup(PORT_VAR).filter(|v| !v.trim().is_empty()) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("{} must be a port number, got {:?}", PORT_VAR, port))?;
        }

        if let Some(log_dir) = lookup(LOG_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_dir = PathBuf::from(log_dir);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Applies an env file at `path` to the process environment.
pub fn load_env_file(path: &Path) -> anyhow::Result<()> {
    skip_missing(dotenvy::from_path(path))
}

// A missing .env is normal in containers; a malformed one is not
fn skip_missing<T>(result: Result<T, dotenvy::Error>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to parse .env"),
    }
}
