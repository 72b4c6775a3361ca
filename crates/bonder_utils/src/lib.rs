pub mod config;
pub mod ledger;
pub mod session;
#[cfg(feature = "test_utils")]
pub mod testing;
pub mod transactions;

// Re-exports for a flat public surface
pub use config::{Config, EventData, EventType};
pub use ledger::{TransactionDetails, TransactionLedger};
pub use session::{ProviderError, Session, TransactionSigner};
pub use transactions::{
    CallKind, CallbackBuilder, CallbackConfig, CallbackError, CallbackState, ClaimStableCall,
    DerivedCallback, EmptyProofResolver, GasMargin, MigrateBondCall, ProofResolver,
    TransactionCallback,
};
