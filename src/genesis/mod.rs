//! Staking contract genesis predeploy.
//!
//! Compiles an ordered validator set into the storage entries the staking
//! contract expects at chain start, so the chain boots as if every listed
//! validator had already staked the contract build's default amount.

pub mod accounts;

pub use accounts::{dev_accounts, dev_validators};

use alloy_genesis::GenesisAccount;
use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_MAX_VALIDATOR_COUNT, DEFAULT_MIN_VALIDATOR_COUNT};
use crate::contract::{parse_u256_literal, ContractVersion};
use crate::errors::PredeployError;
use crate::slots::{
    array_element_slot, encode_address, encode_u64, mapping_address_slot, scalar_slot_key,
};

/// Validator-count bounds written into the contract's min/max slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredeployParams {
    /// Minimum number of validators the contract will allow
    pub min_validator_count: u64,
    /// Maximum number of validators the contract will allow
    pub max_validator_count: u64,
}

impl Default for PredeployParams {
    fn default() -> Self {
        Self {
            min_validator_count: DEFAULT_MIN_VALIDATOR_COUNT,
            max_validator_count: DEFAULT_MAX_VALIDATOR_COUNT,
        }
    }
}

/// JSON manifest describing a predeploy run (`--config` input).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredeployManifest {
    /// Validator addresses to pre-stake, in order
    pub validators: Vec<Address>,
    /// Minimum validator count (defaults to 1)
    #[serde(default = "default_min_validator_count")]
    pub min_validator_count: u64,
    /// Maximum validator count (defaults to the JSON-safe integer bound)
    #[serde(default = "default_max_validator_count")]
    pub max_validator_count: u64,
}

fn default_min_validator_count() -> u64 {
    DEFAULT_MIN_VALIDATOR_COUNT
}

fn default_max_validator_count() -> u64 {
    DEFAULT_MAX_VALIDATOR_COUNT
}

impl PredeployManifest {
    /// The count bounds carried by this manifest.
    pub fn params(&self) -> PredeployParams {
        PredeployParams {
            min_validator_count: self.min_validator_count,
            max_validator_count: self.max_validator_count,
        }
    }
}

/// Build the staking contract's genesis account, with the passed validators
/// pre-staked at the contract build's default amount.
///
/// Validators are processed in input order; the ordinal position of each one
/// determines both its array element and its index-mapping value. Duplicate
/// addresses are compiled as-is: each occurrence takes its own array element,
/// the later occurrence wins the per-address mapping entries, and the total
/// stake counts every occurrence. Callers that need unique validators must
/// deduplicate before calling.
pub fn predeploy_staking_account(
    validators: &[Address],
    params: PredeployParams,
    version: ContractVersion,
) -> Result<GenesisAccount, PredeployError> {
    let contract = version.bundle();
    let layout = contract.layout;

    let code = hex::decode(contract.bytecode.trim_start_matches("0x"))?;

    let default_stake = parse_u256_literal(contract.default_staked_balance).map_err(|source| {
        PredeployError::InvalidStakedBalance {
            literal: contract.default_staked_balance.to_string(),
            source,
        }
    })?;

    let mut storage = BTreeMap::new();
    let mut total_staked = U256::ZERO;

    for (i, validator) in validators.iter().enumerate() {
        let index = i as u64;
        total_staked += default_stake;

        // _validators[i] = validator
        storage.insert(
            array_element_slot(layout.validators_slot, index),
            encode_address(*validator),
        );
        // _addressToIsValidator[validator] = true
        storage.insert(
            mapping_address_slot(*validator, layout.is_validator_slot),
            encode_u64(1),
        );
        // _addressToStakedAmount[validator] = default stake
        storage.insert(
            mapping_address_slot(*validator, layout.staked_amount_of_slot),
            B256::from(default_stake.to_be_bytes()),
        );
        // _addressToValidatorIndex[validator] = i
        storage.insert(
            mapping_address_slot(*validator, layout.validator_index_slot),
            encode_u64(index),
        );
        // Running aggregate; the last iteration's write is the one that lands
        storage.insert(
            scalar_slot_key(layout.total_staked_slot),
            B256::from(total_staked.to_be_bytes()),
        );
        // _validators.length
        storage.insert(scalar_slot_key(layout.validators_slot), encode_u64(index + 1));
    }

    storage.insert(
        scalar_slot_key(layout.min_validators_slot),
        encode_u64(params.min_validator_count),
    );
    storage.insert(
        scalar_slot_key(layout.max_validators_slot),
        encode_u64(params.max_validator_count),
    );

    Ok(GenesisAccount {
        balance: total_staked,
        nonce: Some(1),
        code: Some(code.into()),
        storage: Some(storage),
        private_key: None,
    })
}

/// Build a single-entry genesis alloc fragment with the staking account at
/// `at`, ready to merge into a larger genesis document.
pub fn staking_contract_alloc(
    at: Address,
    validators: &[Address],
    params: PredeployParams,
    version: ContractVersion,
) -> Result<BTreeMap<Address, GenesisAccount>, PredeployError> {
    let mut alloc = BTreeMap::new();
    alloc.insert(at, predeploy_staking_account(validators, params, version)?);
    Ok(alloc)
}

/// Serialize an alloc fragment to JSON.
pub fn alloc_to_json(alloc: &BTreeMap<Address, GenesisAccount>, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(alloc).expect("alloc serialization should not fail")
    } else {
        serde_json::to_string(alloc).expect("alloc serialization should not fail")
    }
}

/// Write an alloc fragment to disk as JSON.
pub fn write_alloc_file(
    alloc: &BTreeMap<Address, GenesisAccount>,
    path: &std::path::Path,
    pretty: bool,
) -> std::io::Result<()> {
    std::fs::write(path, alloc_to_json(alloc, pretty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STAKING_CONTRACT_ADDRESS;
    use crate::contract::STAKING_V1;
    use crate::slots::{decode_address, decode_bool, decode_u64};
    use alloy_primitives::address;

    fn default_stake() -> U256 {
        parse_u256_literal(STAKING_V1.default_staked_balance).unwrap()
    }

    fn params(min: u64, max: u64) -> PredeployParams {
        PredeployParams { min_validator_count: min, max_validator_count: max }
    }

    fn compile(validators: &[Address]) -> GenesisAccount {
        predeploy_staking_account(validators, params(1, 5), ContractVersion::V1).unwrap()
    }

    #[test]
    fn test_empty_validator_set() {
        let account = compile(&[]);
        let layout = STAKING_V1.layout;

        assert_eq!(account.balance, U256::ZERO);
        assert!(account.code.is_some());
        assert!(!account.code.as_ref().unwrap().is_empty());

        let storage = account.storage.as_ref().unwrap();
        assert_eq!(storage.len(), 2);
        assert_eq!(
            *storage.get(&scalar_slot_key(layout.min_validators_slot)).unwrap(),
            encode_u64(1),
        );
        assert_eq!(
            *storage.get(&scalar_slot_key(layout.max_validators_slot)).unwrap(),
            encode_u64(5),
        );
        // No length entry written; an absent key reads as zero on-chain
        assert!(storage.get(&scalar_slot_key(layout.validators_slot)).is_none());
    }

    #[test]
    fn test_single_validator_full_layout() {
        let validator = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let account = compile(&[validator]);
        let layout = STAKING_V1.layout;
        let stake = default_stake();

        assert_eq!(account.balance, stake);
        assert_eq!(account.nonce, Some(1));

        let storage = account.storage.as_ref().unwrap();
        assert_eq!(storage.len(), 4 + 4);

        // _validators[0]
        assert_eq!(
            *storage.get(&array_element_slot(layout.validators_slot, 0)).unwrap(),
            encode_address(validator),
        );
        // _addressToIsValidator[validator]
        assert!(decode_bool(
            *storage.get(&mapping_address_slot(validator, layout.is_validator_slot)).unwrap()
        ));
        // _addressToStakedAmount[validator]
        assert_eq!(
            *storage.get(&mapping_address_slot(validator, layout.staked_amount_of_slot)).unwrap(),
            B256::from(stake.to_be_bytes()),
        );
        // _addressToValidatorIndex[validator]
        assert_eq!(
            *storage.get(&mapping_address_slot(validator, layout.validator_index_slot)).unwrap(),
            encode_u64(0),
        );
        // _stakedAmount
        assert_eq!(
            *storage.get(&scalar_slot_key(layout.total_staked_slot)).unwrap(),
            B256::from(stake.to_be_bytes()),
        );
        // _validators.length
        assert_eq!(
            *storage.get(&scalar_slot_key(layout.validators_slot)).unwrap(),
            encode_u64(1),
        );
        // Count bounds
        assert_eq!(
            *storage.get(&scalar_slot_key(layout.min_validators_slot)).unwrap(),
            encode_u64(1),
        );
        assert_eq!(
            *storage.get(&scalar_slot_key(layout.max_validators_slot)).unwrap(),
            encode_u64(5),
        );
    }

    #[test]
    fn test_entry_count_and_balance() {
        let validators = dev_accounts();
        let n = validators.len();
        let account = compile(&validators);
        let layout = STAKING_V1.layout;

        let storage = account.storage.as_ref().unwrap();
        assert_eq!(storage.len(), 4 * n + 4);
        assert_eq!(account.balance, default_stake() * U256::from(n));
        assert_eq!(
            decode_u64(*storage.get(&scalar_slot_key(layout.validators_slot)).unwrap()),
            n as u64,
        );

        // Every validator is registered at its ordinal position
        for (i, validator) in validators.iter().enumerate() {
            assert_eq!(
                decode_address(
                    *storage.get(&array_element_slot(layout.validators_slot, i as u64)).unwrap()
                ),
                *validator,
            );
            assert_eq!(
                decode_u64(
                    *storage
                        .get(&mapping_address_slot(*validator, layout.validator_index_slot))
                        .unwrap()
                ),
                i as u64,
            );
        }
    }

    #[test]
    fn test_deterministic_output() {
        let validators = dev_validators();
        let first = compile(&validators);
        let second = compile(&validators);
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_sensitivity() {
        let forward = dev_validators();
        let mut reversed = forward.clone();
        reversed.reverse();
        let layout = STAKING_V1.layout;

        let a = compile(&forward);
        let b = compile(&reversed);
        let storage_a = a.storage.as_ref().unwrap();
        let storage_b = b.storage.as_ref().unwrap();

        // Balance, length, and per-address flag/stake entries are
        // order-independent
        assert_eq!(a.balance, b.balance);
        assert_eq!(
            storage_a.get(&scalar_slot_key(layout.validators_slot)),
            storage_b.get(&scalar_slot_key(layout.validators_slot)),
        );
        for validator in &forward {
            assert_eq!(
                storage_a.get(&mapping_address_slot(*validator, layout.is_validator_slot)),
                storage_b.get(&mapping_address_slot(*validator, layout.is_validator_slot)),
            );
            assert_eq!(
                storage_a.get(&mapping_address_slot(*validator, layout.staked_amount_of_slot)),
                storage_b.get(&mapping_address_slot(*validator, layout.staked_amount_of_slot)),
            );
        }

        // Ordinal-dependent entries move with the permutation
        let first = forward[0];
        let last_index = (forward.len() - 1) as u64;
        assert_eq!(
            decode_u64(
                *storage_a.get(&mapping_address_slot(first, layout.validator_index_slot)).unwrap()
            ),
            0,
        );
        assert_eq!(
            decode_u64(
                *storage_b.get(&mapping_address_slot(first, layout.validator_index_slot)).unwrap()
            ),
            last_index,
        );
    }

    #[test]
    fn test_duplicate_addresses_double_count() {
        let validator = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
        let account = compile(&[validator, validator]);
        let layout = STAKING_V1.layout;
        let storage = account.storage.as_ref().unwrap();

        // Stake is counted per occurrence, not per unique address
        assert_eq!(account.balance, default_stake() * U256::from(2u64));

        // Two distinct array elements, both pointing at the same address
        assert_eq!(
            decode_address(*storage.get(&array_element_slot(layout.validators_slot, 0)).unwrap()),
            validator,
        );
        assert_eq!(
            decode_address(*storage.get(&array_element_slot(layout.validators_slot, 1)).unwrap()),
            validator,
        );

        // Per-address mapping keys collide; the second write wins
        assert_eq!(
            decode_u64(
                *storage
                    .get(&mapping_address_slot(validator, layout.validator_index_slot))
                    .unwrap()
            ),
            1,
        );

        // 2 array + 1 is-validator + 1 staked + 1 index + total + length
        // + min + max
        assert_eq!(storage.len(), 9);
        assert_eq!(
            decode_u64(*storage.get(&scalar_slot_key(layout.validators_slot)).unwrap()),
            2,
        );
    }

    #[test]
    fn test_alloc_fragment_json_round_trip() {
        let alloc = staking_contract_alloc(
            STAKING_CONTRACT_ADDRESS,
            &dev_validators(),
            params(1, 100),
            ContractVersion::V1,
        )
        .unwrap();

        let json = alloc_to_json(&alloc, true);
        let parsed: BTreeMap<Address, GenesisAccount> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, alloc);
        assert!(parsed.contains_key(&STAKING_CONTRACT_ADDRESS));
    }

    #[test]
    fn test_manifest_defaults() {
        let manifest: PredeployManifest = serde_json::from_str(
            r#"{"validators": ["0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"]}"#,
        )
        .unwrap();
        assert_eq!(manifest.validators.len(), 1);
        assert_eq!(manifest.params(), PredeployParams::default());
    }

    #[test]
    fn test_manifest_camel_case_fields() {
        let manifest: PredeployManifest = serde_json::from_str(
            r#"{
                "validators": [],
                "minValidatorCount": 4,
                "maxValidatorCount": 100
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.params(), params(4, 100));
    }
}
