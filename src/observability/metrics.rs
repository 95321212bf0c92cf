//! Request metrics.
//!
//! Counters are process-local atomics; they reset on restart and are
//! exposed through `GET /health` and the shutdown summary.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared request counters for the HTTP server.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    requests_total: Arc<AtomicU64>,
    client_errors_total: Arc<AtomicU64>,
    server_errors_total: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub errors_total: u64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            client_errors_total: Arc::new(AtomicU64::new(0)),
            server_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed HTTP request.
    pub fn track_request(&self, method: &str, path: &str, status: u16, duration_ms: u128) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        match status {
            400..=499 => {
                self.client_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            500..=599 => {
                self.server_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }

        if status >= 500 {
            tracing::warn!(
                method = %method,
                path = %path,
                status = status,
                duration_ms = duration_ms,
                "Request failed"
            );
        } else {
            tracing::info!(
                method = %method,
                path = %path,
                status = status,
                duration_ms = duration_ms,
                "Request completed"
            );
        }
    }

    /// Get the total number of requests.
    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Get the number of 4xx responses.
    pub fn client_errors_total(&self) -> u64 {
        self.client_errors_total.load(Ordering::Relaxed)
    }

    /// Get the number of 5xx responses.
    pub fn server_errors_total(&self) -> u64 {
        self.server_errors_total.load(Ordering::Relaxed)
    }

    /// Get the total number of error responses (4xx and 5xx).
    pub fn errors_total(&self) -> u64 {
        self.client_errors_total() + self.server_errors_total()
    }

    /// Get the error rate (0.0 to 1.0).
    pub fn error_rate(&self) -> f64 {
        let errors = self.errors_total() as f64;
        let total = self.requests_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            errors / total
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total(),
            errors_total: self.errors_total(),
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Requests: {}\n\
             Client Errors: {}\n\
             Server Errors: {}\n\
             Error Rate: {:.2}%",
            self.requests_total(),
            self.client_errors_total(),
            self.server_errors_total(),
            self.error_rate() * 100.0,
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}
