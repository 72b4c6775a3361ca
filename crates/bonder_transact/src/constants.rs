/// Bonder V3 function that burns a bond NFT and pays out the claimed amount in DEI.
pub const MIGRATE_NFT_TO_DEI_FUNCTION: &str = "migrateNFTToDEI";

/// Bonder V3 function that claims already vested DEI.
pub const CLAIM_DEI_FUNCTION: &str = "claimDEI";

/// Human readable ABI of the Bonder V3 functions used by the callbacks.
pub const BONDER_V3_ABI: &[&str] = &[
    "function migrateNFTToDEI(uint256 tokenId, uint256 amount, uint256 maturityTime, uint256 claimAmount, bytes32[] proof)",
    "function claimDEI(uint256 amount)",
];

/// EIP-1193 error code a wallet returns when the user declines a request.
pub const USER_REJECTED_REQUEST_CODE: i64 = 4001;
