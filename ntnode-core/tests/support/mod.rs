//! Shared test harness for ntnode-core integration tests.
//!
//! Provides `EventCaptureLayer` and `EventStore` for checking which `tracing`
//! events node construction emits. Uses `tracing::subscriber::set_default()`
//! for test isolation (each test gets its own subscriber via the returned
//! `DefaultGuard`).

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

// =============================================================================
// CapturedEvent — one recorded log event
// =============================================================================

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: tracing::Level,
    pub message: String,
    pub fields: HashMap<String, String>,
}

// =============================================================================
// EventStore — thread-safe accumulator of captured events
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct EventStore(Arc<Mutex<Vec<CapturedEvent>>>);

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured events.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().unwrap().clone()
    }

    /// Returns all events at the given level.
    pub fn at_level(&self, level: tracing::Level) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }
}

/// Visitor that records event fields as string key-value pairs.
struct FieldVisitor {
    message: String,
    fields: HashMap<String, String>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.insert(field.name().to_string(), value.to_string());
        }
    }
}

/// A tracing `Layer` that captures events into an `EventStore`.
pub struct EventCaptureLayer {
    store: EventStore,
}

impl<S: Subscriber> Layer<S> for EventCaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor {
            message: String::new(),
            fields: HashMap::new(),
        };
        event.record(&mut visitor);

        self.store.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

/// Install a capturing subscriber for the current thread.
///
/// Hold the returned guard for the duration of the test.
pub fn init_test_tracing() -> (EventStore, tracing::subscriber::DefaultGuard) {
    let store = EventStore::new();
    let layer = EventCaptureLayer {
        store: store.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    let guard = tracing::subscriber::set_default(subscriber);
    (store, guard)
}
