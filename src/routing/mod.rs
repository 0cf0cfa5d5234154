//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyRequest
//!     → router.rs (classify path: root / api / static)
//!     → StaticResolver or ApiClient
//!     → ProxyResponse
//! ```
//!
//! # Design Decisions
//! - Classification is a pure function of the path
//! - Immutable after construction (thread-safe without locks)
//! - No SPA fallback: only `/` maps to `/index.html`

pub mod router;

pub use router::{ProxyRouter, RouteDecision};
