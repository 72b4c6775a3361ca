use bonder_transact::TransactionResponse;
use std::collections::BTreeMap;

/// What gets recorded next to a submitted transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDetails {
    /// Human readable description shown in the transaction list.
    pub summary: String,
    /// Call specific values (token id, amount, ...) used to correlate the entry later.
    pub correlation: BTreeMap<String, String>,
}

/// The in-app record of submitted transactions.
///
/// Recording is fire-and-forget: the pipeline hands over the response once and never reads
/// entries back, so implementations must not fail the submission that produced them.
pub trait TransactionLedger: Send + Sync {
    fn record(&self, response: &TransactionResponse, details: TransactionDetails);
}
