use super::error::CallbackError;
use crate::ledger::TransactionDetails;
use async_trait::async_trait;
use bonder_transact::{Address, DynSolValue};

/// Session values a call kind may need while preparing its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub account: Address,
    pub chain_id: u64,
}

/// A call ready to be encoded: function, final argument list and what to record on success.
#[derive(Debug, Clone)]
pub struct PreparedCall {
    pub function: &'static str,
    pub args: Vec<DynSolValue>,
    pub details: TransactionDetails,
}

/// The part of a callback that differs between contract calls.
///
/// `prepare` runs at call time, so it validates the intent again (values can change between
/// deriving the callback and invoking it), resolves any auxiliary data and returns the
/// arguments in the order the contract function expects them.
#[async_trait]
pub trait CallKind: Send + Sync {
    /// Contract function the call targets, used for logs and events.
    fn function(&self) -> &'static str;

    async fn prepare(&self, context: &CallContext) -> Result<PreparedCall, CallbackError>;
}

pub(crate) fn missing_dependency(what: &str) -> CallbackError {
    CallbackError::Construction {
        message: format!("Missing dependencies: {what}."),
    }
}
