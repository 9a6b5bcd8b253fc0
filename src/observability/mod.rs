//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides distributed tracing infrastructure for the plugin.
//! Spans produced by `tracing` macros flow through `tracing-opentelemetry`
//! into a custom exporter that writes OTLP JSON lines to a file under the
//! plugin data directory, where they can be inspected offline. Network
//! exporters are not an option inside the Zellij WASM sandbox.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! Trace level comes from the `trace_level` plugin configuration option
//! (default `info`). Initialization is idempotent and silently disables
//! itself when the data directory cannot be created; observability must never
//! take the UI down.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: Tracer provider with the file-based span exporter
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Trace file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
