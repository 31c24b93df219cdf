use thiserror::Error;

/// Failures while assembling the staking predeploy account.
///
/// Both variants are defects in a bundled contract build, not runtime input
/// errors; either aborts compilation before any storage entry is emitted.
#[derive(Debug, Error)]
pub enum PredeployError {
    /// Bundled contract bytecode is not valid hex
    #[error("invalid staking contract bytecode: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),

    /// Bundled default staked balance is not a valid uint256 literal
    #[error("invalid default staked balance {literal:?}: {source}")]
    InvalidStakedBalance {
        /// The literal as bundled with the contract build
        literal: String,
        /// Underlying parse failure
        source: alloy_primitives::ruint::ParseError,
    },
}
