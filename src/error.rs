//! Error taxonomy for the proxy.
//!
//! # Design Decisions
//! - Expected outcomes (404, 405) are ordinary responses, not errors
//! - Errors carry enough context to pick a status at the transport boundary
//! - Startup and Config errors are fatal; everything else is per-request

use thiserror::Error;

/// Errors raised while initializing or serving.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The API server did not become reachable within its startup timeout,
    /// or could not be spawned at all. Fatal: aborts initialization.
    #[error("API server failed to start: {0}")]
    Startup(String),

    /// Invalid configuration surface. Fatal: aborts initialization.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The API server refused or dropped the connection during a proxied
    /// request.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    /// The proxied request exceeded its remaining time budget.
    #[error("upstream request timed out")]
    UpstreamTimeout,

    /// Reading the API server's response body failed mid-stream.
    #[error("failed to read upstream response: {0}")]
    UpstreamBody(#[from] hyper::Error),

    /// An HTTP message could not be constructed (bad header name/value).
    #[error("HTTP message error: {0}")]
    Http(#[from] axum::http::Error),

    /// The inbound request body could not be buffered.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// The gateway event was missing required fields or carried an
    /// unsupported payload version. Fatal to that invocation only.
    #[error("malformed gateway event: {0}")]
    BadEvent(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProxyError {
    /// Status code reported to the original caller when this error reaches
    /// a transport boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::Upstream(_) | ProxyError::UpstreamBody(_) | ProxyError::Http(_) => 502,
            ProxyError::UpstreamTimeout => 504,
            ProxyError::BodyRead(_) | ProxyError::BadEvent(_) => 400,
            _ => 500,
        }
    }
}
