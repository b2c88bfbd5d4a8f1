//! Observability for itemd
//!
//! - Structured logging through `tracing` (pretty or JSON)
//! - A tower middleware that opens one span per HTTP request
//!
//! # Usage
//!
//! ```ignore
//! use itemd::observability::{init_logging, LogFormat};
//!
//! init_logging(LogFormat::Json)?;
//! tracing::info!(port = 8000, "starting");
//! ```

mod http_trace;
mod logger;

pub use http_trace::{request_trace_layer, resource_name, RequestSpan};
pub use logger::{init_logging, LogFormat, DEFAULT_FILTER};
