#![allow(dead_code)]
#![allow(unused_imports)]
pub mod logging;

use bonder_transact::U256;
use bonder_utils::TransactionCallback;
use bonder_utils::testing::{BonderFixture, MockSession, bonder_fixture_with_session};
use rstest::*;

pub use logging::init_test_logging;

pub type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Connected session on chain 250 estimating 21000 gas and accepting every submission.
#[fixture]
pub fn bonder() -> BonderFixture {
    init_test_logging();
    bonder_fixture_with_session(MockSession::connected())
}

pub fn bonder_with(session: MockSession) -> BonderFixture {
    init_test_logging();
    bonder_fixture_with_session(session)
}

pub fn claim_callback(fixture: &BonderFixture, amount: u64) -> TransactionCallback {
    fixture
        .builder()
        .claim_stable(Some(U256::from(amount)))
        .callback
        .expect("connected session derives a callback")
}

pub fn migrate_callback(
    fixture: &BonderFixture,
    token_id: u64,
    claim_amount: u64,
) -> TransactionCallback {
    fixture
        .builder()
        .migrate_bond(
            Some(token_id),
            Some(U256::from(claim_amount)),
            fixture.dataset.clone(),
            fixture.proof_resolver.clone(),
        )
        .callback
        .expect("connected session derives a callback")
}
