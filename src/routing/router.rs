//! Request dispatch.
//!
//! # Responsibilities
//! - Classify each request path
//! - Hand the request to the static resolver or the API client
//!
//! # Design Decisions
//! - Rules evaluated in a fixed order; first match wins
//! - API requests pass through unchanged except for timeout injection

use crate::backend::ApiClient;
use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::{ProxyRequest, ProxyResponse};
use crate::static_files::StaticResolver;

/// Transient classification of a request path. Used only within the
/// router; derivable from the path alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Exactly `/`: serve `/index.html`, method preserved.
    Root,
    /// `/api/` prefix: forward to the API server.
    Api,
    /// Anything else: resolve against the static root.
    Static,
}

impl RouteDecision {
    pub fn classify(path: &str) -> Self {
        if path == "/" {
            RouteDecision::Root
        } else if path.starts_with("/api/") {
            RouteDecision::Api
        } else {
            RouteDecision::Static
        }
    }
}

/// The single dispatch point between the two backends.
#[derive(Clone)]
pub struct ProxyRouter {
    resolver: StaticResolver,
    api: ApiClient,
}

impl ProxyRouter {
    pub fn new(config: &ProxyConfig) -> Self {
        Self {
            resolver: StaticResolver::new(config.static_files.root.clone()),
            api: ApiClient::new(&config.backend.host, config.backend.port),
        }
    }

    /// Dispatch `request` and produce its response.
    pub async fn route(&self, request: ProxyRequest) -> Result<ProxyResponse, ProxyError> {
        let decision = RouteDecision::classify(&request.path);
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            decision = ?decision,
            "Routing request"
        );
        match decision {
            RouteDecision::Root => Ok(self.resolver.resolve(request.method, "/index.html").await),
            RouteDecision::Api => self.api.forward(&request).await,
            RouteDecision::Static => Ok(self.resolver.resolve(request.method, &request.path).await),
        }
    }
}
