//! API server subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     BackendConfig
//!     → process.rs (spawn subprocess with PORT/PYTHONPATH/PATH)
//!     → probe.rs (poll TCP connect until ready or deadline)
//!     → ApiProcess held for the life of the server
//!
//! Per request:
//!     ProxyRequest (path under /api/)
//!     → client.rs (rebuild URL + headers, forward over HTTP)
//!     → ProxyResponse (status, headers, buffered body)
//! ```
//!
//! # Design Decisions
//! - The backend is an opaque upstream; nothing here knows its routes
//! - No supervision: a backend crash after startup is not detected
//!   (documented limitation)
//! - One outbound connection per forwarded request, no pooling

pub mod client;
pub mod probe;
pub mod process;

pub use client::ApiClient;
pub use process::ApiProcess;
