//! Standalone HTTP server transport adapter.
//!
//! # Responsibilities
//! - Create the Axum router and wire up middleware
//! - Parse inbound connections into the internal request model
//! - Serialize responses back, one header line per value
//! - Convert per-request failures to 5xx without touching the listener
//!
//! # Design Decisions
//! - A fixed per-request time budget; the gateway adapter is the only
//!   place with a dynamic budget
//! - Handler errors are converted at this boundary; the listener itself
//!   never observes them

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::header::{HeaderName, HeaderValue},
    http::{self, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use url::form_urlencoded;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::{Headers, Method, ProxyRequest, ProxyResponse};
use crate::routing::ProxyRouter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ProxyRouter>,
    /// Fixed backend time budget per request.
    pub request_timeout: Duration,
}

/// HTTP server for standalone mode.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around an already-initialized proxy router.
    pub fn new(config: &ProxyConfig, proxy_router: Arc<ProxyRouter>) -> Self {
        let request_timeout = Duration::from_secs(config.listener.request_timeout_secs);
        let state = AppState {
            router: proxy_router,
            request_timeout,
        };
        let router = Self::build_router(state, request_timeout);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState, request_timeout: Duration) -> Router {
        // The outer layer is a guard one second behind the backend budget,
        // so the 504 mapping fires first.
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout + Duration::from_secs(1)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Proxy server running");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Proxy server stopped");
        Ok(())
    }
}

/// Main proxy handler. Per-request isolation boundary: any error is
/// converted to a 5xx-class response here and never propagates further.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    match handle(&state, request).await {
        Ok(response) => response,
        Err(err) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            tracing::error!(error = %err, status = %status, "Request failed");
            let reason = status.canonical_reason().unwrap_or("Internal Server Error");
            (status, reason).into_response()
        }
    }
}

async fn handle(state: &AppState, request: Request<Body>) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();

    let Some(method) = Method::parse(parts.method.as_str()) else {
        return into_response(ProxyResponse::text(501, "Unsupported method"));
    };

    let path = parts.uri.path().to_string();
    let query: Vec<(String, String)> = parts
        .uri
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let mut headers = Headers::new();
    for (name, value) in parts.headers.iter() {
        match value.to_str() {
            Ok(value) => headers.append(name.as_str(), value),
            Err(_) => tracing::warn!(header = %name, "Dropping non-UTF-8 header value"),
        }
    }

    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ProxyError::BodyRead(e.to_string()))?;
    let body = if bytes.is_empty() {
        None
    } else {
        Some(bytes.to_vec())
    };

    let proxied = ProxyRequest {
        method,
        path,
        query,
        headers,
        body,
        timeout: state.request_timeout,
    };

    let response = state.router.route(proxied).await?;
    into_response(response)
}

/// Serialize the internal response; multi-valued headers come out as
/// repeated header lines.
fn into_response(response: ProxyResponse) -> Result<Response, ProxyError> {
    let status = StatusCode::from_u16(response.status).map_err(http::Error::from)?;
    let mut builder = Response::builder().status(status);
    if let Some(outbound) = builder.headers_mut() {
        for (name, values) in response.headers.iter() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(http::Error::from)?;
            for value in values {
                let value = HeaderValue::from_str(value).map_err(http::Error::from)?;
                outbound.append(name.clone(), value);
            }
        }
    }
    let body = match response.body {
        Some(bytes) => Body::from(bytes),
        None => Body::empty(),
    };
    Ok(builder.body(body)?)
}
