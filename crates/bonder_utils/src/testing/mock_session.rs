use crate::session::{ProviderError, Session, TransactionSigner};
use async_trait::async_trait;
use bonder_transact::test_utils::AddressMother;
use bonder_transact::{Address, B256, Bytes, CallRequest, TransactionResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// The hash every successful mock submission returns unless configured otherwise.
pub fn mock_transaction_hash() -> B256 {
    B256::repeat_byte(0x42)
}

/// How the mock signer answers `send_transaction`.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    Hash(B256),
    Fail(ProviderError),
    /// Records the request, then never completes.
    Pending,
}

/// A signer that records every request it receives.
#[derive(Debug)]
pub struct MockSigner {
    outcome: SendOutcome,
    sent: Mutex<Vec<CallRequest>>,
}

impl MockSigner {
    pub fn new(outcome: SendOutcome) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_requests(&self) -> Vec<CallRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSigner for MockSigner {
    async fn send_transaction(
        &self,
        request: &CallRequest,
    ) -> Result<TransactionResponse, ProviderError> {
        self.sent.lock().unwrap().push(request.clone());
        match &self.outcome {
            SendOutcome::Hash(hash) => Ok(TransactionResponse::for_request(*hash, request)),
            SendOutcome::Fail(error) => Err(error.clone()),
            SendOutcome::Pending => std::future::pending().await,
        }
    }
}

/// A scripted wallet session.
///
/// Defaults to a connected account on chain 250 whose estimates return 21000 gas, whose
/// read-only calls succeed and whose signer returns [`mock_transaction_hash`].
#[derive(Debug)]
pub struct MockSession {
    account: Option<Address>,
    chain_id: Option<u64>,
    signer: Option<Arc<MockSigner>>,
    estimate: Result<u64, ProviderError>,
    call: Result<Bytes, ProviderError>,
    estimate_calls: AtomicUsize,
    dry_run_calls: AtomicUsize,
    estimated: Mutex<Vec<CallRequest>>,
}

impl MockSession {
    pub fn connected() -> Self {
        Self {
            account: Some(AddressMother::account()),
            chain_id: Some(250),
            signer: Some(Arc::new(MockSigner::new(SendOutcome::Hash(
                mock_transaction_hash(),
            )))),
            estimate: Ok(21_000),
            call: Ok(Bytes::new()),
            estimate_calls: AtomicUsize::new(0),
            dry_run_calls: AtomicUsize::new(0),
            estimated: Mutex::new(Vec::new()),
        }
    }

    pub fn with_account(mut self, account: Option<Address>) -> Self {
        self.account = account;
        self
    }

    pub fn with_chain_id(mut self, chain_id: Option<u64>) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn without_signer(mut self) -> Self {
        self.signer = None;
        self
    }

    pub fn with_estimate(mut self, estimate: Result<u64, ProviderError>) -> Self {
        self.estimate = estimate;
        self
    }

    pub fn with_call(mut self, call: Result<Bytes, ProviderError>) -> Self {
        self.call = call;
        self
    }

    pub fn with_send(mut self, outcome: SendOutcome) -> Self {
        self.signer = Some(Arc::new(MockSigner::new(outcome)));
        self
    }

    pub fn estimate_calls(&self) -> usize {
        self.estimate_calls.load(Ordering::SeqCst)
    }

    pub fn dry_run_calls(&self) -> usize {
        self.dry_run_calls.load(Ordering::SeqCst)
    }

    pub fn estimated_requests(&self) -> Vec<CallRequest> {
        self.estimated.lock().unwrap().clone()
    }

    pub fn sent_requests(&self) -> Vec<CallRequest> {
        self.signer
            .as_ref()
            .map(|signer| signer.sent_requests())
            .unwrap_or_default()
    }

    pub fn send_calls(&self) -> usize {
        self.sent_requests().len()
    }
}

#[async_trait]
impl Session for MockSession {
    fn account(&self) -> Option<Address> {
        self.account
    }

    fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    fn signer(&self) -> Option<Arc<dyn TransactionSigner>> {
        self.signer
            .clone()
            .map(|signer| signer as Arc<dyn TransactionSigner>)
    }

    async fn estimate_gas(&self, request: &CallRequest) -> Result<u64, ProviderError> {
        self.estimate_calls.fetch_add(1, Ordering::SeqCst);
        self.estimated.lock().unwrap().push(request.clone());
        self.estimate.clone()
    }

    async fn call(&self, _request: &CallRequest) -> Result<Bytes, ProviderError> {
        self.dry_run_calls.fetch_add(1, Ordering::SeqCst);
        self.call.clone()
    }
}
