//! Static file serving subsystem.
//!
//! # Design Decisions
//! - GET/HEAD only; the web application is read-only by contract
//! - Misses are responses (404/405), not errors

pub mod resolver;

pub use resolver::StaticResolver;
