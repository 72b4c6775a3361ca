use super::call_kind::{CallContext, CallKind, PreparedCall, missing_dependency};
use super::error::CallbackError;
use crate::ledger::TransactionDetails;
use async_trait::async_trait;
use bonder_transact::{CLAIM_DEI_FUNCTION, DynSolValue, U256};
use std::collections::BTreeMap;

/// Claims vested DEI from the bonder. Single argument: `[claimAmount]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimStableCall {
    pub amount: Option<U256>,
}

#[async_trait]
impl CallKind for ClaimStableCall {
    fn function(&self) -> &'static str {
        CLAIM_DEI_FUNCTION
    }

    async fn prepare(&self, _context: &CallContext) -> Result<PreparedCall, CallbackError> {
        let amount = self
            .amount
            .filter(|amount| !amount.is_zero())
            .ok_or_else(|| missing_dependency("claim amount"))?;

        Ok(PreparedCall {
            function: CLAIM_DEI_FUNCTION,
            args: vec![DynSolValue::Uint(amount, 256)],
            details: TransactionDetails {
                summary: format!("Claim {amount} DEI"),
                correlation: BTreeMap::from([("amount".to_string(), amount.to_string())]),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bonder_transact::test_utils::AddressMother;

    fn context() -> CallContext {
        CallContext {
            account: AddressMother::account(),
            chain_id: 250,
        }
    }

    #[tokio::test]
    async fn test_prepare_claim() {
        let call = ClaimStableCall {
            amount: Some(U256::from(1_500)),
        };
        let prepared = call.prepare(&context()).await.unwrap();

        assert_eq!(prepared.args, vec![DynSolValue::Uint(U256::from(1_500), 256)]);
        assert_eq!(prepared.details.summary, "Claim 1500 DEI");
    }

    #[tokio::test]
    async fn test_zero_amount_is_missing() {
        for amount in [None, Some(U256::ZERO)] {
            let err = ClaimStableCall { amount }
                .prepare(&context())
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Missing dependencies: claim amount.");
        }
    }
}
