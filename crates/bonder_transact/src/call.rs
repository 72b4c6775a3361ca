//! Call request and transaction response types.
//!
//! A [`CallRequest`] is the fully encoded description of a contract call: who sends it,
//! which contract receives it, the ABI encoded call data and the attached value. The same
//! request is used for gas estimation, the read-only dry run and the final submission,
//! the only difference being that a gas limit is attached right before submission.

use alloy_primitives::{Address, B256, Bytes, U256};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Represents an encoded contract call.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Builder)]
#[builder(
    name = "CallRequestBuilder",
    setter(into, strip_option),
    build_fn(validate = "Self::validate")
)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// The account the call is sent from.
    pub from: Address,

    /// The contract receiving the call.
    pub to: Address,

    /// ABI encoded function selector and arguments.
    pub data: Bytes,

    /// Native value attached to the call, zero for non payable functions.
    #[builder(default)]
    #[serde(default)]
    pub value: U256,

    /// Gas limit for the submission. Absent while the request is being estimated.
    #[builder(default)]
    #[serde(rename = "gas")]
    pub gas_limit: Option<u64>,
}

impl CallRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.gas_limit {
            return Err("Gas limit must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl CallRequest {
    /// Returns a copy of this request carrying the given gas limit.
    pub fn with_gas_limit(&self, gas_limit: u64) -> CallRequest {
        CallRequest {
            gas_limit: Some(gas_limit),
            ..self.clone()
        }
    }

    /// Returns true when the call attaches native value.
    pub fn is_payable(&self) -> bool {
        !self.value.is_zero()
    }
}

/// The response handed back by a signer once a transaction has been broadcast.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub hash: B256,
    pub from: Address,
    pub to: Option<Address>,
    pub nonce: Option<u64>,
    #[serde(rename = "gas")]
    pub gas_limit: Option<u64>,
    pub chain_id: Option<u64>,
}

impl TransactionResponse {
    /// Builds a response for a request that was accepted by the signer.
    pub fn for_request(hash: B256, request: &CallRequest) -> Self {
        TransactionResponse {
            hash,
            from: request.from,
            to: Some(request.to),
            nonce: None,
            gas_limit: request.gas_limit,
            chain_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AddressMother, CallRequestMother};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults_value_and_gas() {
        let request = CallRequestBuilder::default()
            .from(AddressMother::account())
            .to(AddressMother::bonder())
            .data(Bytes::from_static(&[0x01, 0x02]))
            .build()
            .unwrap();

        assert_eq!(request.value, U256::ZERO);
        assert_eq!(request.gas_limit, None);
        assert!(!request.is_payable());
    }

    #[test]
    fn test_builder_rejects_zero_gas_limit() {
        let result = CallRequestMother::claim().gas_limit(0u64).build();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Gas limit must be greater than zero"));
    }

    #[test]
    fn test_with_gas_limit_keeps_call_unchanged() {
        let request = CallRequestMother::claim().build().unwrap();
        let with_gas = request.with_gas_limit(25_200);

        assert_eq!(with_gas.gas_limit, Some(25_200));
        assert_eq!(with_gas.to, request.to);
        assert_eq!(with_gas.data, request.data);
        assert_eq!(with_gas.value, request.value);
        assert_eq!(request.gas_limit, None);
    }

    #[test]
    fn test_serializes_with_rpc_field_names() {
        let request = CallRequestMother::claim()
            .value(U256::from(5))
            .build()
            .unwrap()
            .with_gas_limit(30_000);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["gas"], 30_000);
        assert_eq!(json["value"], "0x5");
        assert!(json.get("gasLimit").is_none());
    }

    #[test]
    fn test_response_for_request() {
        let request = CallRequestMother::claim().build().unwrap().with_gas_limit(42_000);
        let response = TransactionResponse::for_request(B256::repeat_byte(0xab), &request);

        assert_eq!(response.from, request.from);
        assert_eq!(response.to, Some(request.to));
        assert_eq!(response.gas_limit, Some(42_000));
    }
}
