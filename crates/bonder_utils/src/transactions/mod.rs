pub mod call_kind;
pub mod callback;
pub mod claim;
pub mod error;
pub mod error_transformation;
pub mod gas;
pub mod migrate;
pub mod proof;

// Re-export commonly used transaction types
pub use call_kind::{CallContext, CallKind, PreparedCall};
pub use callback::{
    CallbackBuilder, CallbackState, DerivedCallback, MISSING_DEPENDENCIES_MESSAGE,
    TransactionCallback,
};
pub use claim::ClaimStableCall;
pub use error::{CallbackError, ESTIMATION_RETRY_MESSAGE, ZERO_ESTIMATE_MESSAGE};
pub use error_transformation::{decode_revert_data, extract_revert_reason};
pub use gas::{CallbackConfig, CallbackConfigError, GasMargin};
pub use migrate::MigrateBondCall;
pub use proof::{EmptyProofResolver, ProofRequest, ProofResolver};
