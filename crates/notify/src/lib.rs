//! Outcome notification abstraction (mechanics only).
//!
//! Inventory mutations return structured [`AddOutcome`](shelfstock_inventory::AddOutcome)
//! values; this crate defines the consumed interface a presentation host
//! implements to render them, plus a tracing-backed sink and an in-memory
//! recording sink for tests/dev.

pub mod recording;
pub mod sink;
pub mod tracing_sink;

pub use recording::{Notification, RecordingSink};
pub use sink::NotificationSink;
pub use tracing_sink::TracingSink;
