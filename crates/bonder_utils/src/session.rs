//! Wallet session seams consumed by the callback pipeline.
//!
//! The pipeline never talks to an RPC endpoint or a wallet directly. Whatever owns the
//! wallet connection implements [`Session`] (and hands out a [`TransactionSigner`]) so the
//! same pipeline runs against a browser wallet, a local key or a test double.

use async_trait::async_trait;
use bonder_transact::{
    Address, Bytes, CallRequest, TransactionResponse, USER_REJECTED_REQUEST_CODE,
};
use serde_json::Value as JsonValue;
use snafu::Snafu;
use std::sync::Arc;

/// A failure reported by the node or the wallet, shaped like a JSON-RPC error object.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("{message}"))]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
    /// Raw revert data when the node returned it.
    pub data: Option<Bytes>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            ..Self::new(message)
        }
    }

    pub fn with_data(mut self, data: Bytes) -> Self {
        self.data = Some(data);
        self
    }

    /// The error a wallet reports when the user declines to sign.
    pub fn user_rejected() -> Self {
        Self::with_code(USER_REJECTED_REQUEST_CODE, "User rejected the request.")
    }

    /// Reads a JSON-RPC error object (`{"code", "message", "data"}`).
    ///
    /// Wallets frequently wrap the node error, either as the `data` object itself or under
    /// `data.originalError`. The nested error wins since it carries the revert reason and
    /// data; the outer code is only kept when the nested one has none.
    pub fn from_rpc_json(value: &JsonValue) -> Self {
        let nested = [value.pointer("/data/originalError"), value.get("data")]
            .into_iter()
            .flatten()
            .find(|inner| inner.get("message").is_some());
        if let Some(inner) = nested {
            let mut nested = Self::from_rpc_json(inner);
            if nested.code.is_none() {
                nested.code = value.get("code").and_then(JsonValue::as_i64);
            }
            return nested;
        }

        let message = value
            .get("message")
            .and_then(JsonValue::as_str)
            .unwrap_or("Unknown provider error")
            .to_string();
        let data = value
            .get("data")
            .and_then(JsonValue::as_str)
            .and_then(|raw| hex::decode(raw.trim_start_matches("0x")).ok())
            .map(Bytes::from);

        Self {
            code: value.get("code").and_then(JsonValue::as_i64),
            message,
            data,
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_REQUEST_CODE)
    }
}

/// Signs and broadcasts transactions on behalf of the connected account.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn send_transaction(
        &self,
        request: &CallRequest,
    ) -> Result<TransactionResponse, ProviderError>;
}

/// The connected wallet session.
#[async_trait]
pub trait Session: Send + Sync {
    fn account(&self) -> Option<Address>;

    fn chain_id(&self) -> Option<u64>;

    /// Returns the signing capability, if the session has one.
    fn signer(&self) -> Option<Arc<dyn TransactionSigner>>;

    async fn estimate_gas(&self, request: &CallRequest) -> Result<u64, ProviderError>;

    /// Executes the request read-only against the latest state.
    async fn call(&self, request: &CallRequest) -> Result<Bytes, ProviderError>;
}
