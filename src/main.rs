use stakegen::cli::Cli;
use stakegen::genesis::{self, PredeployManifest, PredeployParams};
use stakegen::output;

use alloy_primitives::Address;
use clap::Parser;
use eyre::WrapErr;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Main entry point for the staking predeploy generator
fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // Assemble the validator set and count bounds
    let (validators, params) = if let Some(path) = &cli.config {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read manifest {}", path.display()))?;
        let manifest: PredeployManifest = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("failed to parse manifest {}", path.display()))?;
        let params = manifest.params();
        (manifest.validators, params)
    } else {
        let mut validators = cli.validators.clone();
        if let Some(path) = &cli.validators_file {
            validators.extend(read_validators_file(path)?);
        }
        if cli.dev {
            validators.extend(genesis::dev_validators());
        }
        let params = PredeployParams {
            min_validator_count: cli.min_validators,
            max_validator_count: cli.max_validators,
        };
        (validators, params)
    };

    output::print_banner(&cli.staking_address, cli.contract_version.as_str());
    output::print_validators(&validators);
    output::print_params(params.min_validator_count, params.max_validator_count);

    if validators.is_empty() {
        output::print_empty_warning();
    }
    let mut seen = HashSet::new();
    for validator in &validators {
        if !seen.insert(*validator) {
            output::print_duplicate_warning(validator);
        }
    }

    let alloc = genesis::staking_contract_alloc(
        cli.staking_address,
        &validators,
        params,
        cli.contract_version,
    )?;

    let account = &alloc[&cli.staking_address];
    let entries = account.storage.as_ref().map_or(0, |storage| storage.len());
    output::print_summary(entries, account.balance);

    match &cli.out {
        Some(path) => {
            genesis::write_alloc_file(&alloc, path, cli.pretty)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            output::print_written(path);
        }
        None => println!("{}", genesis::alloc_to_json(&alloc, cli.pretty)),
    }

    Ok(())
}

/// Read a validator list from a text file: one address per line, blank lines
/// skipped, `#` starts a comment.
fn read_validators_file(path: &Path) -> eyre::Result<Vec<Address>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read validator file {}", path.display()))?;

    let mut validators = Vec::new();
    for line in raw.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let address = line
            .parse::<Address>()
            .map_err(|err| eyre::eyre!("invalid validator address {line:?}: {err}"))?;
        validators.push(address);
    }
    Ok(validators)
}
