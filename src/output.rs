//! Colored console output for the stakegen tool.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use alloy_primitives::{Address, U256};
use colored::Colorize;
use std::path::Path;

/// Print the run banner with the target contract identity.
pub fn print_banner(staking_address: &Address, version: &str) {
    println!();
    println!("{}", "=== Staking Predeploy Generator ===".blue().bold());
    println!("  Contract address: {}", format!("{staking_address}").cyan());
    println!("  Contract version: {}", version.cyan());
}

/// Print the validator set being pre-staked, with ordinal positions.
pub fn print_validators(validators: &[Address]) {
    println!(
        "  Validators ({}):",
        validators.len().to_string().cyan()
    );
    for (i, validator) in validators.iter().enumerate() {
        println!(
            "    {}. {}",
            i.to_string().dimmed(),
            format!("{validator}").cyan()
        );
    }
}

/// Print the validator-count bounds written to the contract.
pub fn print_params(min: u64, max: u64) {
    println!(
        "  Validator bounds: {} to {}",
        min.to_string().cyan(),
        max.to_string().cyan()
    );
}

/// Warn that the validator set is empty (the contract boots with no
/// pre-staked validators).
pub fn print_empty_warning() {
    println!(
        "  {} No validators given. The contract will start with an empty set.",
        "WARNING:".yellow().bold()
    );
    println!(
        "  {}",
        "Pass --validator, --validators-file, --config or --dev.".dimmed()
    );
}

/// Warn that the input list repeats an address. Stake is counted per
/// occurrence, so the contract balance double-counts it.
pub fn print_duplicate_warning(addr: &Address) {
    println!(
        "  {} Validator {} appears more than once; its stake is counted per occurrence.",
        "WARNING:".yellow().bold(),
        format!("{addr}").cyan()
    );
}

/// Print the compiled account summary.
pub fn print_summary(entries: usize, balance: U256) {
    println!(
        "  {} Compiled {} storage entries, account balance {} wei",
        "OK".green().bold(),
        entries.to_string().cyan(),
        balance.to_string().cyan()
    );
}

/// Print where the alloc fragment was written.
pub fn print_written(path: &Path) {
    println!(
        "  {} Alloc fragment written to {}",
        "OK".green().bold(),
        path.display().to_string().cyan()
    );
}
