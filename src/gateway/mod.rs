//! Gateway transport adapter subsystem.
//!
//! # Data Flow
//! ```text
//! API Gateway v2 event (JSON)
//!     → event.rs (typed envelope)
//!     → adapter.rs (normalize into ProxyRequest, budget the timeout)
//!     → routing layer
//!     → adapter.rs (comma-join headers, split cookies, base64 decision)
//!     → GatewayReply (JSON)
//! ```
//!
//! # Design Decisions
//! - The event's wire format is a given; only version "2.0" is accepted
//! - A malformed event fails that invocation, never the host process
//! - Upstream failures become 502/504 replies, not invocation errors

pub mod adapter;
pub mod event;

pub use adapter::{handle_event, parse_event, TIMEOUT_BUFFER};
pub use event::{GatewayEvent, GatewayReply};
