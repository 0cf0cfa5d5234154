//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Start the API server before any traffic is served
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - One explicit context object instead of hidden one-time-init globals

use crate::backend::ApiProcess;
use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::routing::ProxyRouter;

/// Process-wide state built once at startup.
///
/// In standalone mode the caller destructures this to serve traffic and
/// later shut the API server down. In gateway mode the hosting process
/// builds it once when first prepared to serve traffic and reuses it
/// across invocations; the process handle is simply kept alive.
pub struct AppContext {
    pub router: ProxyRouter,
    pub process: ApiProcess,
}

impl AppContext {
    /// Start the API server, wait for readiness, and build the router.
    pub async fn initialize(config: &ProxyConfig) -> Result<Self, ProxyError> {
        let process = ApiProcess::start(&config.backend).await?;
        let router = ProxyRouter::new(config);
        Ok(Self { router, process })
    }
}
