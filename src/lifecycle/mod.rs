//! Startup and shutdown coordination.
//!
//! # Design Decisions
//! - One-time initialization builds an explicit context object; nothing
//!   hides in globals
//! - Shutdown fans out through a broadcast channel

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::AppContext;
