//! Structured logging and optional OpenTelemetry span export.
//!
//! # Telemetry invariants
//!
//! - Request bodies are never logged; handlers log identifiers and error
//!   messages only.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`) and
//!   overridden by `RUST_LOG`.

pub mod init;

pub use init::init_telemetry;
