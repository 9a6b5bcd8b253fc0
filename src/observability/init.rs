//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with OpenTelemetry integration, wiring
//! the pipeline from `tracing` macros to the file exporter.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported span.
const SERVICE_NAME: &str = "zspaces";

/// Trace file name within the plugin data directory.
const TRACE_FILE: &str = "zspaces-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// The filter level comes from `config.trace_level`, defaulting to `info`.
/// Creates the data directory if needed; returns silently when that fails,
/// leaving tracing disabled. Safe to call from both the plugin and worker
/// threads; only the first call on each thread installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
