//! OTLP JSON span formatter.
//!
//! Converts OpenTelemetry span data into OTLP (OpenTelemetry Protocol) JSON
//! documents so the trace file can be fed to standard OTLP tooling.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::Value as JsonValue;
use std::time::SystemTime;

/// Instrumentation scope name recorded on every batch.
const SCOPE_NAME: &str = "zspaces";

/// Formats span batches into complete OTLP JSON documents.
pub struct SpanFormatter {
    /// Resource metadata (service name, etc.) attached to each batch.
    resource: Resource,
}

impl SpanFormatter {
    /// Creates a formatter carrying the given resource metadata.
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats a batch of spans as one OTLP JSON document.
    ///
    /// The document shape is `resourceSpans → scopeSpans → spans`, with
    /// resource attributes and the instrumentation scope filled in.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| attribute_json(&k.to_string(), v))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(span_json).collect();

        serde_json::json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": spans,
                }]
            }]
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish()
    }
}

/// Formats one span, with IDs as hex strings and timestamps in unix nanos.
fn span_json(span: &SpanData) -> JsonValue {
    let parent_span_id = if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let (status_code, status_message) = match &span.status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            serde_json::json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": attributes_json(&event.attributes),
            })
        })
        .collect();

    let links: Vec<JsonValue> = span
        .links
        .iter()
        .map(|link| {
            serde_json::json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": attributes_json(&link.attributes),
            })
        })
        .collect();

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes_json(&span.attributes),
        "events": events,
        "links": links,
        "status": { "code": status_code, "message": status_message },
    })
}

/// OTLP integer code for a span kind.
const fn span_kind_code(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

/// Formats a timestamp as a nanosecond string (OTLP encodes these as strings).
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

/// Formats an attribute list as an OTLP JSON array.
fn attributes_json(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| attribute_json(&kv.key.to_string(), &kv.value))
        .collect()
}

/// Formats one key/value pair, mapping value types to OTLP value objects.
fn attribute_json(key: &str, value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    let value = match value {
        Value::Bool(b) => serde_json::json!({ "boolValue": b }),
        Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
        Value::F64(f) => serde_json::json!({ "doubleValue": f }),
        Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
        Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
    };

    serde_json::json!({ "key": key, "value": value })
}
