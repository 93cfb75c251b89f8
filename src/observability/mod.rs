//! Tracing export to a local OTLP JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → JsonLinesExporter → hub-otlp.json
//! ```
//!
//! The hub draws on stdout, so spans never go to the terminal. Each exported
//! batch is one OTLP JSON document per line, in a file that rotates at 10 MB
//! and keeps three backups.
//!
//! # Level
//!
//! 1. `RUST_LOG`, when set and valid
//! 2. `trace_level` from the configuration
//! 3. `info`
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: span exporter and tracer provider
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{effective_level, init_tracing, TRACE_FILE_NAME};
