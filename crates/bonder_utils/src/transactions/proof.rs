use async_trait::async_trait;
use bonder_transact::{Address, B256, U256};

/// What a migration asks the proof service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofRequest {
    pub account: Address,
    pub chain_id: u64,
    pub token_id: u64,
    pub claim_amount: U256,
}

/// Resolves the merkle proof a bond migration has to present on chain.
///
/// The proof is issued by an external service; its shape on the wire is that service's
/// business. The pipeline only needs the ordered list of 32-byte nodes, or a message
/// explaining why none could be issued.
#[async_trait]
pub trait ProofResolver: Send + Sync {
    async fn resolve(&self, request: &ProofRequest) -> Result<Vec<B256>, String>;
}

/// Resolver for deployments that do not check proofs: always an empty proof.
pub struct EmptyProofResolver;

#[async_trait]
impl ProofResolver for EmptyProofResolver {
    async fn resolve(&self, _request: &ProofRequest) -> Result<Vec<B256>, String> {
        Ok(Vec::new())
    }
}
