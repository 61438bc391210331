//! Logging setup for shelfstock hosts.

pub mod tracing;

pub use crate::tracing::init;
