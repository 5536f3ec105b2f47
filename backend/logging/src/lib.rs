//! Structured logging for albumkit: console plus rolling NDJSON file output,
//! and token scrubbing for strings that end up in log lines.

pub mod logger;
pub mod redact;

pub use logger::{init_from_config, init_logger};
pub use redact::redact_sensitive_data;
