//! Contract bindings turn a function name and an ordered argument list into call data.
//!
//! The pipeline only depends on the [`ContractBinding`] trait. [`AbiContractBinding`] is the
//! ABI-driven implementation used by the bonder contracts; other bindings (for example one
//! wrapping a generated `sol!` interface) can be plugged in by implementing the trait.

use crate::error::BonderTransactError;
use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Bytes};

/// A deployed contract: its address plus the encoder for its functions.
pub trait ContractBinding: Send + Sync {
    fn address(&self) -> Address;

    fn encode(&self, function: &str, args: &[DynSolValue]) -> Result<Bytes, BonderTransactError>;
}

/// A [`ContractBinding`] backed by a JSON ABI.
#[derive(Debug, Clone)]
pub struct AbiContractBinding {
    address: Address,
    abi: JsonAbi,
}

impl AbiContractBinding {
    pub fn new(address: Address, abi: JsonAbi) -> Self {
        Self { address, abi }
    }

    /// Creates a binding from human readable signatures such as
    /// `function claimDEI(uint256 amount)`.
    pub fn from_signatures<'a>(
        address: Address,
        signatures: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, BonderTransactError> {
        let abi = JsonAbi::parse(signatures).map_err(|e| BonderTransactError::AbiParse {
            message: e.to_string(),
        })?;
        Ok(Self::new(address, abi))
    }

    /// Creates a binding from a standard JSON ABI document.
    pub fn from_json(address: Address, json: &str) -> Result<Self, BonderTransactError> {
        let abi: JsonAbi =
            serde_json::from_str(json).map_err(|e| BonderTransactError::AbiParse {
                message: e.to_string(),
            })?;
        Ok(Self::new(address, abi))
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }
}

impl ContractBinding for AbiContractBinding {
    fn address(&self) -> Address {
        self.address
    }

    fn encode(&self, function: &str, args: &[DynSolValue]) -> Result<Bytes, BonderTransactError> {
        let overloads =
            self.abi
                .function(function)
                .ok_or_else(|| BonderTransactError::FunctionNotFound {
                    name: function.to_string(),
                })?;

        // Overloads are told apart by arity only
        let func = overloads
            .iter()
            .find(|f| f.inputs.len() == args.len())
            .ok_or_else(|| BonderTransactError::Encoding {
                function: function.to_string(),
                message: format!(
                    "no overload takes {} arguments (available: {})",
                    args.len(),
                    overloads
                        .iter()
                        .map(|f| f.inputs.len().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })?;

        func.abi_encode_input(args)
            .map(Bytes::from)
            .map_err(|e| BonderTransactError::Encoding {
                function: function.to_string(),
                message: e.to_string(),
            })
    }
}
