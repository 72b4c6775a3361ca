use std::sync::Arc;

use super::mock_session::MockSession;
use super::recording_ledger::RecordingLedger;
use crate::session::Session;
use crate::transactions::{CallbackBuilder, CallbackConfig, EmptyProofResolver, ProofResolver};
use bonder_transact::test_utils::{BindingMother, BondMother};
use bonder_transact::{AbiContractBinding, BondDataset, ContractBinding};

/// Everything a callback needs, backed by test doubles.
pub struct BonderFixture {
    pub session: Arc<MockSession>,
    pub binding: Arc<AbiContractBinding>,
    pub ledger: Arc<RecordingLedger>,
    pub dataset: Arc<BondDataset>,
    pub proof_resolver: Arc<dyn ProofResolver>,
    pub config: CallbackConfig,
}

impl BonderFixture {
    pub fn new(session: MockSession) -> Self {
        Self {
            session: Arc::new(session),
            binding: Arc::new(BindingMother::bonder_v3()),
            ledger: Arc::new(RecordingLedger::new()),
            dataset: Arc::new(BondMother::dataset()),
            proof_resolver: Arc::new(EmptyProofResolver),
            config: CallbackConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CallbackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_proof_resolver(mut self, proof_resolver: Arc<dyn ProofResolver>) -> Self {
        self.proof_resolver = proof_resolver;
        self
    }

    pub fn builder(&self) -> CallbackBuilder {
        let session: Arc<dyn Session> = self.session.clone();
        let binding: Arc<dyn ContractBinding> = self.binding.clone();
        CallbackBuilder::new(Some(session), Some(binding), self.ledger.clone())
            .with_config(self.config.clone())
    }
}

pub fn bonder_fixture() -> BonderFixture {
    BonderFixture::new(MockSession::connected())
}

pub fn bonder_fixture_with_session(session: MockSession) -> BonderFixture {
    BonderFixture::new(session)
}
