use bonder_transact::B256;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Minimal lifecycle event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Emitted when gas estimation failed and the read-only call was used to diagnose it
    GasEstimateDiagnosed,
    /// Emitted when a transaction was accepted by the signer
    TransactionSubmitted,
}

/// Minimal event payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasEstimateDiagnosedEventData {
    pub function: String,
    pub estimate_error: String,
    /// Whether the diagnostic read-only call went through without reverting
    pub dry_run_succeeded: bool,
    pub dry_run_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSubmittedEventData {
    pub function: String,
    pub hash: B256,
    pub gas_limit: u64,
    pub summary: String,
}

#[derive(Debug, Clone)]
pub enum EventData {
    GasEstimateDiagnosed(GasEstimateDiagnosedEventData),
    TransactionSubmitted(TransactionSubmittedEventData),
}

/// Async event emitter using Tokio broadcast
#[derive(Clone)]
pub struct AsyncEventEmitter {
    sender: broadcast::Sender<(EventType, EventData)>,
}

impl AsyncEventEmitter {
    pub fn new(buffer: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(buffer);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<(EventType, EventData)> {
        self.sender.subscribe()
    }

    pub async fn emit(&self, event_type: EventType, data: EventData) {
        // Ignore error if there are no subscribers
        let _ = self.sender.send((event_type, data));
    }
}

/// Global flags and event emitter
static DEBUG: AtomicBool = AtomicBool::new(false);
static EVENTS: Lazy<AsyncEventEmitter> = Lazy::new(|| AsyncEventEmitter::new(32));

/// Global runtime config singleton
pub struct Config;

impl Config {
    /// When set, the pipeline logs full call data at every stage.
    pub fn debug() -> bool {
        DEBUG.load(Ordering::Relaxed)
    }

    pub fn events() -> AsyncEventEmitter {
        EVENTS.clone()
    }

    pub fn configure(new_debug: Option<bool>) {
        if let Some(d) = new_debug {
            DEBUG.store(d, Ordering::Relaxed);
        }
    }
}
