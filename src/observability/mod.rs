//! Observability module for request metrics and structured logging.

pub mod metrics;

pub use metrics::{MetricsSnapshot, MetricsTracker, Timer};
