//! Test doubles for the wallet session, signer and ledger.

mod fixture;
mod mock_session;
mod recording_ledger;

pub use fixture::{BonderFixture, bonder_fixture, bonder_fixture_with_session};
pub use mock_session::{MockSession, MockSigner, SendOutcome, mock_transaction_hash};
pub use recording_ledger::{LedgerEntry, RecordingLedger};
