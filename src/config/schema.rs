//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits so a config can also be embedded or
//! round-tripped in tests.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the serverless web proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Standalone listener configuration.
    pub listener: ListenerConfig,

    /// API server process and upstream settings.
    pub backend: BackendConfig,

    /// Static file serving settings.
    pub static_files: StaticConfig,
}

/// Listener configuration for standalone mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Fixed per-request time budget for backend calls, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout_secs: 15,
        }
    }
}

/// API server configuration.
///
/// The backend is spawned once at startup and must listen on `port`,
/// which it receives via its `PORT` environment variable. The port is
/// distinct from the proxy's own listen port.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Shell command that starts the API server.
    pub command: String,

    /// Host the API server listens on.
    pub host: String,

    /// Port the API server listens on.
    pub port: u16,

    /// Time to wait for the API server to accept connections, in seconds.
    pub startup_timeout_secs: u64,

    /// Module search path handed to the API server (PYTHONPATH).
    pub dependency_path: String,

    /// PATH handed to the API server; inherited from this process.
    pub path_env: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            command: "python api/app.py".to_string(),
            host: "localhost".to_string(),
            port: 8180,
            startup_timeout_secs: 5,
            dependency_path: ".pypath/".to_string(),
            path_env: std::env::var("PATH").unwrap_or_default(),
        }
    }
}

/// Static file serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Root directory of the built web application. Must contain an
    /// `index.html`, served at `/`.
    pub root: PathBuf,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("app/build"),
        }
    }
}
