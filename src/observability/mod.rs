//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request path:
//!     → TraceLayer span (method, uri, request_id)
//!     → metrics.rs middleware (counters, latency histogram)
//!     → handlers emit structured events
//!
//! Consumers:
//!     → stdout (pretty or JSON, see logging.rs)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
