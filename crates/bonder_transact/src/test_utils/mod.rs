use crate::{
    AbiContractBinding, BONDER_V3_ABI, BondDataset, BondPosition, CallRequestBuilder,
};
use alloy_primitives::{Address, Bytes, U256, address};

pub struct AddressMother {}
impl AddressMother {
    /// The connected wallet used across tests.
    pub fn account() -> Address {
        address!("0x9bd3b9f5f8e4a1d2c3b4a5968778695a4b3c2d1e")
    }

    /// The Bonder V3 deployment used across tests.
    pub fn bonder() -> Address {
        address!("0x2f3e4d5c6b7a8998a7b6c5d4e3f2a1b0c9d8e7f6")
    }
}

pub struct BindingMother {}
impl BindingMother {
    pub fn bonder_v3() -> AbiContractBinding {
        AbiContractBinding::from_signatures(AddressMother::bonder(), BONDER_V3_ABI.iter().copied())
            .unwrap()
    }
}

pub struct BondMother {}
impl BondMother {
    pub fn position(token_id: u64, amount: u64, maturity_time: u64) -> BondPosition {
        BondPosition {
            token_id,
            amount: U256::from(amount),
            maturity_time,
        }
    }

    /// Token 42 matures at 1_700_000_000 with a face amount of 500.
    pub fn dataset() -> BondDataset {
        BondDataset::new(vec![
            Self::position(42, 500, 1_700_000_000),
            Self::position(7, 1_000, 1_750_000_000),
        ])
    }
}

pub struct CallRequestMother {}
impl CallRequestMother {
    pub fn claim() -> CallRequestBuilder {
        CallRequestBuilder::default()
            .from(AddressMother::account())
            .to(AddressMother::bonder())
            .data(Bytes::from_static(&[0x5c, 0x4f, 0x3a, 0x1e]))
            .to_owned()
    }
}
