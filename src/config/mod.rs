//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read variables, parse numerics)
//!     → loader.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared by reference with all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload
//! - All fields have defaults matching the documented deployment surface,
//!   so an empty environment still yields a runnable config
//! - Validation separates syntactic parsing from semantic checks

pub mod loader;
pub mod schema;

pub use loader::from_env;
pub use schema::{BackendConfig, ListenerConfig, ProxyConfig, StaticConfig};
