use clap::Parser;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_MAX_VALIDATOR_COUNT, DEFAULT_MIN_VALIDATOR_COUNT, STAKING_CONTRACT_ADDRESS,
};
use crate::contract::ContractVersion;
use alloy_primitives::Address;

/// CLI arguments for the staking predeploy generator
#[derive(Parser, Debug)]
#[command(name = "stakegen", about = "Staking contract genesis predeploy generator")]
pub struct Cli {
    /// Validator addresses to pre-stake (repeatable or comma-separated)
    #[arg(long = "validator", value_delimiter = ',')]
    pub validators: Vec<Address>,

    /// File with one validator address per line (`#` starts a comment)
    #[arg(long, conflicts_with = "config")]
    pub validators_file: Option<PathBuf>,

    /// JSON manifest carrying the validator list and count bounds.
    /// Overrides --validator, --min-validators and --max-validators.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use the standard dev mnemonic validators
    #[arg(long)]
    pub dev: bool,

    /// Minimum validator count written to the contract
    #[arg(long, default_value_t = DEFAULT_MIN_VALIDATOR_COUNT)]
    pub min_validators: u64,

    /// Maximum validator count written to the contract
    #[arg(long, default_value_t = DEFAULT_MAX_VALIDATOR_COUNT)]
    pub max_validators: u64,

    /// Contract build whose bytecode and storage layout to use
    #[arg(long, value_enum, default_value = "v1")]
    pub contract_version: ContractVersion,

    /// Address the staking contract occupies in the genesis alloc
    #[arg(long, default_value_t = STAKING_CONTRACT_ADDRESS)]
    pub staking_address: Address,

    /// Output path for the alloc fragment (stdout if omitted)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stakegen"]);
        assert!(cli.validators.is_empty());
        assert_eq!(cli.min_validators, DEFAULT_MIN_VALIDATOR_COUNT);
        assert_eq!(cli.max_validators, DEFAULT_MAX_VALIDATOR_COUNT);
        assert_eq!(cli.contract_version, ContractVersion::V1);
        assert_eq!(cli.staking_address, STAKING_CONTRACT_ADDRESS);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_comma_separated_validators() {
        let cli = Cli::parse_from([
            "stakegen",
            "--validator",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266,0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
        ]);
        assert_eq!(
            cli.validators,
            vec![
                address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
                address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            ],
        );
    }

    #[test]
    fn test_repeated_validator_flag() {
        let cli = Cli::parse_from([
            "stakegen",
            "--validator",
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "--validator",
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "--min-validators",
            "2",
            "--max-validators",
            "10",
        ]);
        assert_eq!(cli.validators.len(), 2);
        assert_eq!(cli.min_validators, 2);
        assert_eq!(cli.max_validators, 10);
    }
}
