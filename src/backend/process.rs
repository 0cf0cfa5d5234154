//! API server process management.
//!
//! # Responsibilities
//! - Spawn the API server subprocess with a controlled environment
//! - Confirm it accepts connections before any traffic is served
//! - Kill it on graceful shutdown of the standalone server
//!
//! # Design Decisions
//! - Shell-style command so deployments can set `API_COMMAND` freely
//! - Environment is cleared except PATH, PORT and the dependency path;
//!   the backend sees exactly the documented contract
//! - No monitoring after startup: a crashed backend is not restarted

use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};

use crate::backend::probe;
use crate::config::BackendConfig;
use crate::error::ProxyError;

/// Owns the live API server subprocess.
///
/// Created once at startup and held for the lifetime of the server. In
/// gateway mode the hosting process's own lifecycle governs it and
/// `shutdown` is never called.
#[derive(Debug)]
pub struct ApiProcess {
    child: Child,
}

impl ApiProcess {
    /// Spawn the API server and wait for it to accept connections.
    ///
    /// On probe timeout the subprocess is killed and a fatal
    /// [`ProxyError::Startup`] is returned; there is no retry.
    pub async fn start(config: &BackendConfig) -> Result<Self, ProxyError> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            command = %config.command,
            "Starting API server"
        );

        let child = Command::new("sh")
            .arg("-c")
            .arg(&config.command)
            .env_clear()
            .env("PATH", &config.path_env)
            .env("PORT", config.port.to_string())
            .env("PYTHONPATH", &config.dependency_path)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| {
                ProxyError::Startup(format!("failed to spawn {:?}: {e}", config.command))
            })?;

        let mut process = Self { child };

        let timeout = Duration::from_secs(config.startup_timeout_secs);
        if let Err(err) = probe::wait_until_ready(&config.host, config.port, timeout).await {
            process.kill().await;
            return Err(ProxyError::Startup(err.to_string()));
        }

        tracing::info!(pid = process.id(), "API server started");
        Ok(process)
    }

    /// OS process id, if the process has not been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Kill and reap the API server. Standalone graceful shutdown only.
    pub async fn shutdown(mut self) {
        tracing::info!(pid = self.id(), "Terminating API server");
        self.kill().await;
    }

    async fn kill(&mut self) {
        if let Err(e) = self.child.kill().await {
            tracing::warn!(error = %e, "Failed to kill API server process");
        }
    }
}
