use crate::ledger::{TransactionDetails, TransactionLedger};
use bonder_transact::TransactionResponse;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub response: TransactionResponse,
    pub details: TransactionDetails,
}

/// Keeps every recorded transaction in memory.
#[derive(Debug, Default)]
pub struct RecordingLedger {
    entries: Mutex<Vec<LedgerEntry>>,
}

impl RecordingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransactionLedger for RecordingLedger {
    fn record(&self, response: &TransactionResponse, details: TransactionDetails) {
        self.entries.lock().unwrap().push(LedgerEntry {
            response: response.clone(),
            details,
        });
    }
}
