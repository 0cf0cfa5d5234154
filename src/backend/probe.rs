//! TCP readiness probing.
//!
//! # Responsibilities
//! - Poll a host:port with TCP connect attempts until it opens
//! - Give up once the deadline passes
//!
//! # Design Decisions
//! - Binary outcome: connectable or not, no partial success
//! - Short fixed poll interval so startup latency tracks the backend,
//!   not the prober

use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpStream;
use tokio::time::{self, Instant};

/// Delay between connect attempts.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The endpoint never became connectable within the deadline.
#[derive(Debug, Error)]
#[error("{host}:{port} did not accept connections within {timeout:?}")]
pub struct ProbeTimeout {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

/// Wait until `host:port` accepts a TCP connection, or `timeout` elapses.
pub async fn wait_until_ready(host: &str, port: u16, timeout: Duration) -> Result<(), ProbeTimeout> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(ProbeTimeout {
                host: host.to_string(),
                port,
                timeout,
            });
        }
        match time::timeout(remaining, TcpStream::connect((host, port))).await {
            Ok(Ok(_)) => return Ok(()),
            Ok(Err(_)) => time::sleep(POLL_INTERVAL).await,
            Err(_) => {
                return Err(ProbeTimeout {
                    host: host.to_string(),
                    port,
                    timeout,
                })
            }
        }
    }
}
