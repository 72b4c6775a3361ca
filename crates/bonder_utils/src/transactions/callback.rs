//! Transaction callbacks: the one pipeline every contract action goes through.
//!
//! A [`CallbackBuilder`] is derived from the current wallet session, contract binding and
//! ledger. Deriving a callback for a [`CallKind`] yields either the inert
//! [`CallbackState::Invalid`] state (no callback) or a [`TransactionCallback`] whose
//! [`execute`](TransactionCallback::execute) runs:
//!
//! 1. construct: prepare the arguments and encode the call
//! 2. estimate: ask the session for a gas estimate, diagnosing failures with a read-only call
//! 3. margin: apply the configured gas margin
//! 4. submit: hand the request to the signer
//! 5. finish: record the transaction in the ledger, or classify the failure
//!
//! Nothing is retried and nothing is de-duplicated. Dropping the `execute` future abandons
//! the wait, but a request already handed to the signer may still be broadcast.

use super::call_kind::{CallContext, CallKind};
use super::claim::ClaimStableCall;
use super::error::{CallbackError, ESTIMATION_RETRY_MESSAGE, ZERO_ESTIMATE_MESSAGE};
use super::error_transformation::{reverted_call_error, submission_error};
use super::gas::CallbackConfig;
use super::migrate::MigrateBondCall;
use super::proof::ProofResolver;
use crate::config::{
    Config, EventData, EventType, GasEstimateDiagnosedEventData, TransactionSubmittedEventData,
};
use crate::ledger::{TransactionDetails, TransactionLedger};
use crate::session::{Session, TransactionSigner};
use bonder_transact::{
    Address, B256, BondDataset, CallRequest, CallRequestBuilder, ContractBinding, U256,
};
use derive_more::Debug;
use log::{debug, error, info, warn};
use std::sync::Arc;

/// Message attached to the inert state.
pub const MISSING_DEPENDENCIES_MESSAGE: &str = "Missing dependencies";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackState {
    /// A session value or the contract binding is absent; there is nothing to execute.
    Invalid,
    /// Set by callers around `execute()`. Never produced by the builder.
    Pending,
    Valid,
}

/// Result of deriving a callback.
#[derive(Debug)]
pub struct DerivedCallback {
    pub state: CallbackState,
    pub callback: Option<TransactionCallback>,
    pub error: Option<String>,
}

impl DerivedCallback {
    fn invalid() -> Self {
        Self {
            state: CallbackState::Invalid,
            callback: None,
            error: Some(MISSING_DEPENDENCIES_MESSAGE.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.state == CallbackState::Valid
    }
}

/// Derives transaction callbacks from the current session, binding and ledger.
///
/// The builder holds no state of its own; derive again whenever any dependency changes.
#[derive(Debug, Clone)]
pub struct CallbackBuilder {
    #[debug(skip)]
    session: Option<Arc<dyn Session>>,
    #[debug(skip)]
    binding: Option<Arc<dyn ContractBinding>>,
    #[debug(skip)]
    ledger: Arc<dyn TransactionLedger>,
    config: CallbackConfig,
}

impl CallbackBuilder {
    pub fn new(
        session: Option<Arc<dyn Session>>,
        binding: Option<Arc<dyn ContractBinding>>,
        ledger: Arc<dyn TransactionLedger>,
    ) -> Self {
        Self {
            session,
            binding,
            ledger,
            config: CallbackConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CallbackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CallbackConfig {
        &self.config
    }

    /// Derives the callback for an arbitrary call kind.
    pub fn build(&self, kind: impl CallKind + 'static) -> DerivedCallback {
        let Some(session) = self.session.clone() else {
            return DerivedCallback::invalid();
        };
        let (Some(account), Some(chain_id), Some(signer), Some(binding)) = (
            session.account(),
            session.chain_id(),
            session.signer(),
            self.binding.clone(),
        ) else {
            return DerivedCallback::invalid();
        };

        DerivedCallback {
            state: CallbackState::Valid,
            callback: Some(TransactionCallback {
                context: CallContext { account, chain_id },
                session,
                signer,
                binding,
                ledger: self.ledger.clone(),
                kind: Arc::new(kind),
                config: self.config.clone(),
            }),
            error: None,
        }
    }

    /// Callback migrating bond `token_id`, claiming `claim_amount`.
    pub fn migrate_bond(
        &self,
        token_id: Option<u64>,
        claim_amount: Option<U256>,
        dataset: Arc<BondDataset>,
        proof_resolver: Arc<dyn ProofResolver>,
    ) -> DerivedCallback {
        self.build(MigrateBondCall {
            token_id,
            claim_amount,
            dataset,
            proof_resolver,
        })
    }

    /// Callback claiming `amount` of vested DEI.
    pub fn claim_stable(&self, amount: Option<U256>) -> DerivedCallback {
        self.build(ClaimStableCall { amount })
    }
}

/// A callback in the valid state.
#[derive(Debug, Clone)]
pub struct TransactionCallback {
    context: CallContext,
    #[debug(skip)]
    session: Arc<dyn Session>,
    #[debug(skip)]
    signer: Arc<dyn TransactionSigner>,
    #[debug(skip)]
    binding: Arc<dyn ContractBinding>,
    #[debug(skip)]
    ledger: Arc<dyn TransactionLedger>,
    #[debug(skip)]
    kind: Arc<dyn CallKind>,
    config: CallbackConfig,
}

impl TransactionCallback {
    pub fn account(&self) -> Address {
        self.context.account
    }

    pub fn chain_id(&self) -> u64 {
        self.context.chain_id
    }

    /// Builds, estimates, submits and records the transaction. Resolves to its hash.
    pub async fn execute(&self) -> Result<B256, CallbackError> {
        let function = self.kind.function();
        debug!("Executing {} callback for {}", function, self.context.account);

        let (request, details) = self.construct_call().await.inspect_err(|e| {
            error!("Could not construct call data for {}: {}", function, e);
        })?;

        let gas_limit = match self.config.gas_limit_override {
            Some(gas_limit) => {
                debug!("Using gas limit override {} for {}", gas_limit, function);
                gas_limit.get()
            }
            None => {
                let estimate = self.estimate_gas(&request).await?;
                let gas_limit = self.config.gas_margin.apply(estimate);
                debug!(
                    "Estimated {} gas for {}, submitting with limit {}",
                    estimate, function, gas_limit
                );
                gas_limit
            }
        };

        self.submit(request.with_gas_limit(gas_limit), details).await
    }

    async fn construct_call(&self) -> Result<(CallRequest, TransactionDetails), CallbackError> {
        let prepared = self.kind.prepare(&self.context).await?;

        let data = self
            .binding
            .encode(prepared.function, &prepared.args)
            .map_err(|e| CallbackError::Construction {
                message: e.to_string(),
            })?;

        let request = CallRequestBuilder::default()
            .from(self.context.account)
            .to(self.binding.address())
            .data(data)
            .value(self.config.value)
            .build()
            .map_err(|e| CallbackError::Construction {
                message: format!("Unexpected error. Could not construct calldata: {e}"),
            })?;

        if Config::debug() {
            debug!(
                "Constructed {} call to {} data={:?} value={}",
                prepared.function, request.to, request.data, request.value
            );
        }

        Ok((request, prepared.details))
    }

    async fn estimate_gas(&self, request: &CallRequest) -> Result<u64, CallbackError> {
        let function = self.kind.function();

        let estimate_error = match self.session.estimate_gas(request).await {
            Ok(0) => {
                warn!("Gas estimate for {} returned zero", function);
                return Err(CallbackError::Estimation {
                    message: ZERO_ESTIMATE_MESSAGE.to_string(),
                });
            }
            Ok(estimate) => return Ok(estimate),
            Err(e) => e,
        };

        debug!(
            "Gas estimate failed for {}, trying a read-only call to extract the error: {}",
            function, estimate_error
        );

        let dry_run = self.session.call(request).await;

        Config::events()
            .emit(
                EventType::GasEstimateDiagnosed,
                EventData::GasEstimateDiagnosed(GasEstimateDiagnosedEventData {
                    function: function.to_string(),
                    estimate_error: estimate_error.message.clone(),
                    dry_run_succeeded: dry_run.is_ok(),
                    dry_run_error: dry_run.as_ref().err().map(|e| e.message.clone()),
                }),
            )
            .await;

        match dry_run {
            Ok(result) => {
                warn!(
                    "Unexpected successful call after failed gas estimate for {} (estimate error: {}, result: {:?})",
                    function, estimate_error, result
                );
                Err(CallbackError::Estimation {
                    message: ESTIMATION_RETRY_MESSAGE.to_string(),
                })
            }
            Err(call_error) => {
                debug!("Read-only call for {} reverted: {}", function, call_error);
                Err(reverted_call_error(&call_error))
            }
        }
    }

    async fn submit(
        &self,
        request: CallRequest,
        details: TransactionDetails,
    ) -> Result<B256, CallbackError> {
        let function = self.kind.function();

        let response = match self.signer.send_transaction(&request).await {
            Ok(response) => response,
            Err(e) => {
                let classified = submission_error(&e);
                if classified.is_user_rejection() {
                    info!("User rejected the {} transaction", function);
                } else {
                    error!(
                        "Transaction failed: {} (to={} data={:?} value={} gas={:?})",
                        e, request.to, request.data, request.value, request.gas_limit
                    );
                }
                return Err(classified);
            }
        };

        info!("Submitted {} transaction {}", function, response.hash);

        let hash = response.hash;
        let gas_limit = request.gas_limit.unwrap_or_default();
        let summary = details.summary.clone();
        self.ledger.record(&response, details);

        Config::events()
            .emit(
                EventType::TransactionSubmitted,
                EventData::TransactionSubmitted(TransactionSubmittedEventData {
                    function: function.to_string(),
                    hash,
                    gas_limit,
                    summary,
                }),
            )
            .await;

        Ok(hash)
    }
}
