//! Worker thread implementation for asynchronous catalog loading.
//!
//! This module implements the Zellij worker thread interface. Route leaf data
//! (listings, notices) is loaded off the main plugin thread so rendering never
//! blocks on catalog parsing or validation; the page shows its placeholder
//! until the corresponding response arrives. Distributed tracing context is
//! re-attached so worker spans link to their main-thread parents.

use crate::catalog::{CatalogSource, EmbeddedCatalog};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling catalog loads.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent from
/// the main plugin thread. The catalog source is initialized lazily on first
/// message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct ZspacesWorker {
    /// Catalog source, initialized lazily on first use.
    #[serde(skip)]
    source: Option<Box<dyn CatalogSource>>,
}

impl ZspacesWorker {
    /// Creates a worker with the embedded catalog source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: Some(Box::new(EmbeddedCatalog::new())),
        }
    }

    /// Returns the catalog source, initializing it if needed.
    fn source(&mut self) -> &dyn CatalogSource {
        &**self
            .source
            .get_or_insert_with(|| Box::new(EmbeddedCatalog::new()))
    }

    /// Helper for handling load results with consistent logging.
    fn handle_load_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "catalog load successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "catalog load failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadCatalog` message.
    fn handle_load_catalog(&mut self) -> WorkerResponse {
        Self::handle_load_result(
            "load catalog",
            self.source().load_listings(),
            |listings| {
                tracing::debug!(listing_count = listings.len(), "catalog loaded");
                WorkerResponse::CatalogLoaded { listings }
            },
        )
    }

    /// Handles the `LoadNotices` message.
    fn handle_load_notices(&mut self) -> WorkerResponse {
        Self::handle_load_result("load notices", self.source().load_notices(), |notices| {
            tracing::debug!(notice_count = notices.len(), "notices loaded");
            WorkerResponse::NoticesLoaded { notices }
        })
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the serialized trace
    /// information in the message, allowing spans created in the worker thread
    /// to be linked to their parent spans in the main thread. The returned
    /// guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match message {
            WorkerMessage::LoadCatalog { trace_context }
            | WorkerMessage::LoadNotices { trace_context } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { .. } => self.handle_load_catalog(),
            WorkerMessage::LoadNotices { .. } => self.handle_load_notices(),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring spans
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZspacesWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Deserializes the message payload
    /// 3. Processes the message via `handle_message`
    /// 4. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_catalog_returns_the_sample_listings() {
        let mut worker = ZspacesWorker::new();
        let response = worker.handle_message(WorkerMessage::LoadCatalog { trace_context: None });

        match response {
            WorkerResponse::CatalogLoaded { listings } => {
                assert_eq!(listings.len(), 5);
                assert_eq!(listings[0].district, "서초구");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn load_notices_returns_the_notice_feed() {
        let mut worker = ZspacesWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadNotices { trace_context: None });

        assert!(matches!(
            response,
            WorkerResponse::NoticesLoaded { notices } if !notices.is_empty()
        ));
    }
}
