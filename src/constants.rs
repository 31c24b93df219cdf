use alloy_primitives::{address, Address};

/// Address the staking contract occupies in the genesis alloc (deterministic,
/// pre-assigned; consensus reads the validator set from here)
pub const STAKING_CONTRACT_ADDRESS: Address =
    address!("0000000000000000000000000000000000001001");

/// Default minimum validator count written to the contract
pub const DEFAULT_MIN_VALIDATOR_COUNT: u64 = 1;

/// Default maximum validator count written to the contract.
/// Capped below 2^53 so genesis JSON tooling round-trips it exactly.
pub const DEFAULT_MAX_VALIDATOR_COUNT: u64 = (1 << 53) - 2;
