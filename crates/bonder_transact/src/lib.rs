mod binding;
mod bonds;
mod call;
pub mod constants;
mod error;

// Re-export all the public items
pub use alloy_dyn_abi::DynSolValue;
pub use alloy_primitives::{Address, B256, Bytes, U256};
pub use binding::{AbiContractBinding, ContractBinding};
pub use bonds::{BondDataset, BondPosition};
pub use call::{CallRequest, CallRequestBuilder, CallRequestBuilderError, TransactionResponse};
pub use constants::*;
pub use error::BonderTransactError;

#[cfg(feature = "test_utils")]
pub mod test_utils;
