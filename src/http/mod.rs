//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound transport (socket or gateway event)
//!     → request.rs (internal request model)
//!     → [routing layer dispatches]
//!     → response.rs (internal response model)
//!     → content.rs (binary-vs-text decision, gateway only)
//!     → Serialized back to the transport
//! ```
//!
//! # Design Decisions
//! - One internal request/response model for both transports
//! - Multi-valued, case-insensitive headers everywhere internally;
//!   conversion happens at the transport boundary only

pub mod content;
pub mod headers;
pub mod request;
pub mod response;
pub mod server;

pub use headers::Headers;
pub use request::{Method, ProxyRequest};
pub use response::ProxyResponse;
pub use server::HttpServer;
