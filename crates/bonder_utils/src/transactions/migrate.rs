use super::call_kind::{CallContext, CallKind, PreparedCall, missing_dependency};
use super::error::CallbackError;
use super::proof::{ProofRequest, ProofResolver};
use crate::ledger::TransactionDetails;
use async_trait::async_trait;
use bonder_transact::{BondDataset, DynSolValue, MIGRATE_NFT_TO_DEI_FUNCTION, U256};
use derive_more::Debug;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Migrates a bond NFT to DEI.
///
/// Arguments are passed as `[tokenId, amount, maturityTime, claimAmount, proof]`, where
/// `amount` and `maturityTime` come from the bond dataset and `proof` from the resolver.
#[derive(Debug, Clone)]
pub struct MigrateBondCall {
    pub token_id: Option<u64>,
    pub claim_amount: Option<U256>,
    #[debug(skip)]
    pub dataset: Arc<BondDataset>,
    #[debug(skip)]
    pub proof_resolver: Arc<dyn ProofResolver>,
}

#[async_trait]
impl CallKind for MigrateBondCall {
    fn function(&self) -> &'static str {
        MIGRATE_NFT_TO_DEI_FUNCTION
    }

    async fn prepare(&self, context: &CallContext) -> Result<PreparedCall, CallbackError> {
        let token_id = self
            .token_id
            .filter(|id| *id != 0)
            .ok_or_else(|| missing_dependency("bond token id"))?;
        let claim_amount = self
            .claim_amount
            .filter(|amount| !amount.is_zero())
            .ok_or_else(|| missing_dependency("claim amount"))?;
        let position = self
            .dataset
            .get(token_id)
            .ok_or_else(|| CallbackError::Construction {
                message: format!("Bond #{token_id} is not part of the bond dataset."),
            })?;

        let proof = self
            .proof_resolver
            .resolve(&ProofRequest {
                account: context.account,
                chain_id: context.chain_id,
                token_id,
                claim_amount,
            })
            .await
            .map_err(|message| CallbackError::Construction {
                message: format!("Could not resolve the migration proof: {message}"),
            })?;
        debug!("Resolved proof with {} nodes for bond #{}", proof.len(), token_id);

        let args = vec![
            DynSolValue::Uint(U256::from(token_id), 256),
            DynSolValue::Uint(position.amount, 256),
            DynSolValue::Uint(U256::from(position.maturity_time), 256),
            DynSolValue::Uint(claim_amount, 256),
            DynSolValue::Array(
                proof
                    .into_iter()
                    .map(|node| DynSolValue::FixedBytes(node, 32))
                    .collect(),
            ),
        ];

        Ok(PreparedCall {
            function: MIGRATE_NFT_TO_DEI_FUNCTION,
            args,
            details: TransactionDetails {
                summary: format!("Migrate DeiBond #{token_id} with {claim_amount} bDEI"),
                correlation: BTreeMap::from([
                    ("tokenId".to_string(), token_id.to_string()),
                    ("claimAmount".to_string(), claim_amount.to_string()),
                ]),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::proof::EmptyProofResolver;
    use bonder_transact::B256;
    use bonder_transact::test_utils::{AddressMother, BondMother};
    use rstest::rstest;

    struct FixedProof(Vec<B256>);

    #[async_trait]
    impl ProofResolver for FixedProof {
        async fn resolve(&self, _request: &ProofRequest) -> Result<Vec<B256>, String> {
            Ok(self.0.clone())
        }
    }

    struct FailingProof;

    #[async_trait]
    impl ProofResolver for FailingProof {
        async fn resolve(&self, _request: &ProofRequest) -> Result<Vec<B256>, String> {
            Err("proof service unavailable".to_string())
        }
    }

    fn context() -> CallContext {
        CallContext {
            account: AddressMother::account(),
            chain_id: 250,
        }
    }

    fn migrate(token_id: Option<u64>, claim_amount: Option<u64>) -> MigrateBondCall {
        MigrateBondCall {
            token_id,
            claim_amount: claim_amount.map(U256::from),
            dataset: Arc::new(BondMother::dataset()),
            proof_resolver: Arc::new(EmptyProofResolver),
        }
    }

    #[tokio::test]
    async fn test_argument_order() {
        let prepared = migrate(Some(42), Some(100)).prepare(&context()).await.unwrap();

        assert_eq!(prepared.function, MIGRATE_NFT_TO_DEI_FUNCTION);
        assert_eq!(
            prepared.args,
            vec![
                DynSolValue::Uint(U256::from(42), 256),
                DynSolValue::Uint(U256::from(500), 256),
                DynSolValue::Uint(U256::from(1_700_000_000u64), 256),
                DynSolValue::Uint(U256::from(100), 256),
                DynSolValue::Array(vec![]),
            ]
        );
        assert_eq!(prepared.details.summary, "Migrate DeiBond #42 with 100 bDEI");
        assert_eq!(prepared.details.correlation["tokenId"], "42");
    }

    #[tokio::test]
    async fn test_proof_is_appended_last() {
        let mut call = migrate(Some(42), Some(100));
        call.proof_resolver = Arc::new(FixedProof(vec![B256::repeat_byte(0xaa)]));

        let prepared = call.prepare(&context()).await.unwrap();

        assert_eq!(
            prepared.args.last(),
            Some(&DynSolValue::Array(vec![DynSolValue::FixedBytes(
                B256::repeat_byte(0xaa),
                32
            )]))
        );
    }

    #[rstest]
    #[case(None, Some(100), "Missing dependencies: bond token id.")]
    #[case(Some(0), Some(100), "Missing dependencies: bond token id.")]
    #[case(Some(42), None, "Missing dependencies: claim amount.")]
    #[case(Some(42), Some(0), "Missing dependencies: claim amount.")]
    #[case(Some(9_999), Some(100), "Bond #9999 is not part of the bond dataset.")]
    #[tokio::test]
    async fn test_invalid_intent(
        #[case] token_id: Option<u64>,
        #[case] claim_amount: Option<u64>,
        #[case] expected: &str,
    ) {
        let err = migrate(token_id, claim_amount)
            .prepare(&context())
            .await
            .unwrap_err();

        assert!(matches!(err, CallbackError::Construction { .. }));
        assert_eq!(err.to_string(), expected);
    }

    #[tokio::test]
    async fn test_resolver_failure_is_a_construction_error() {
        let mut call = migrate(Some(42), Some(100));
        call.proof_resolver = Arc::new(FailingProof);

        let err = call.prepare(&context()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Could not resolve the migration proof: proof service unavailable"
        );
    }
}
