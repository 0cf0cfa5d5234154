//! Serverless web proxy.
//!
//! Routes requests between a dynamically started API server process and
//! a directory of static files, running either as a standalone listening
//! server or as a per-invocation adapter for API Gateway v2 events.
//!
//! # Architecture Overview
//!
//! ```text
//!   socket request ──┐                          ┌─▶ static_files (GET/HEAD under root)
//!                    ├─▶ ProxyRequest ─▶ routing┤
//!   gateway event ───┘                          └─▶ backend::client ─▶ API server
//!                                                        ▲
//!                        backend::process ───────────────┘
//!                        (spawned once, readiness-probed at startup)
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod routing;
pub mod static_files;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::{AppContext, Shutdown};
pub use routing::ProxyRouter;
