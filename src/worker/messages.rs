//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main plugin
//! thread and the background worker thread that loads catalog data. It also
//! implements distributed tracing context propagation across thread boundaries.

use crate::domain::listing::{Listing, Notice};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog {}),
    load_notices(LoadNotices {}),
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to one route leaf load. All variants carry an
/// optional trace context for distributed tracing support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the listing catalog for the browse page.
    LoadCatalog {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Load the notice feed for the notice page.
    LoadNotices {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the main thread.
///
/// Each variant corresponds to the completion of a leaf load, either
/// successfully with the loaded records or with an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The listing catalog was loaded and validated.
    CatalogLoaded {
        /// Listings in catalog order.
        listings: Vec<Listing>,
    },

    /// The notice feed was loaded.
    NoticesLoaded {
        /// Notices, newest first.
        notices: Vec<Notice>,
    },

    /// An error occurred during a load; the affected leaf stays pending.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_round_trip_through_json() {
        let message = WorkerMessage::LoadCatalog {
            trace_context: Some(TraceContext {
                trace_id: "0".repeat(32),
                parent_span_id: "1".repeat(16),
            }),
        };

        let payload = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn absent_trace_context_is_omitted_from_payload() {
        let message = WorkerMessage::LoadNotices { trace_context: None };
        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));
    }
}
