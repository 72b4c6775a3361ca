//! Turns provider failures into [`CallbackError`]s.
//!
//! Nodes and wallets report reverts in a handful of textual shapes, and some also return
//! the raw `Error(string)` / `Panic(uint256)` revert data. The classification here keeps the
//! provider's message untouched and only extracts the bare reason next to it.

use super::error::CallbackError;
use crate::session::ProviderError;
use alloy_dyn_abi::{DynSolType, DynSolValue};
use lazy_static::lazy_static;
use regex::Regex;

/// Selector of `Error(string)`.
const ERROR_STRING_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];
/// Selector of `Panic(uint256)`.
const PANIC_SELECTOR: [u8; 4] = [0x4e, 0x48, 0x7b, 0x71];

lazy_static! {
    static ref HARDHAT_REASON_RE: Regex =
        Regex::new(r"reverted with reason string '(?P<reason>[^']*)'").unwrap();
    static ref EXECUTION_REVERTED_RE: Regex =
        Regex::new(r"execution reverted:\s*(?P<reason>[^\n]+)").unwrap();
}

/// Extracts the revert reason from a provider error message.
pub fn extract_revert_reason(message: &str) -> Option<String> {
    let caps = HARDHAT_REASON_RE
        .captures(message)
        .or_else(|| EXECUTION_REVERTED_RE.captures(message))?;
    let reason = caps["reason"].trim().trim_end_matches(['"', '}']).trim();
    if reason.is_empty() {
        None
    } else {
        Some(reason.to_string())
    }
}

/// Decodes `Error(string)` and `Panic(uint256)` revert data.
pub fn decode_revert_data(data: &[u8]) -> Option<String> {
    if data.len() < 4 {
        return None;
    }
    let (selector, payload) = data.split_at(4);

    if selector == ERROR_STRING_SELECTOR {
        let decoded = DynSolType::Tuple(vec![DynSolType::String])
            .abi_decode_params(payload)
            .ok()?;
        match decoded.as_tuple()? {
            [DynSolValue::String(reason)] if !reason.is_empty() => Some(reason.clone()),
            _ => None,
        }
    } else if selector == PANIC_SELECTOR {
        match DynSolType::Uint(256).abi_decode(payload).ok()? {
            DynSolValue::Uint(code, _) => Some(format!("panic code 0x{code:x}")),
            _ => None,
        }
    } else {
        None
    }
}

/// Classifies the failure of the diagnostic read-only call.
pub(crate) fn reverted_call_error(error: &ProviderError) -> CallbackError {
    let reason = error
        .data
        .as_ref()
        .and_then(|data| decode_revert_data(data))
        .or_else(|| extract_revert_reason(&error.message));

    CallbackError::RevertedCall {
        message: error.message.clone(),
        reason,
    }
}

/// Classifies a signing or broadcast failure.
pub(crate) fn submission_error(error: &ProviderError) -> CallbackError {
    if error.is_user_rejection() {
        CallbackError::UserRejected
    } else {
        CallbackError::Submission {
            message: error.message.clone(),
            code: error.code,
        }
    }
}
