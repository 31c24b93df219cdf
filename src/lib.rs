//! # Stakegen - Staking Contract Genesis Predeploy Generator
//!
//! Compiles a validator set into the exact storage entries a PoS staking
//! contract expects at chain start, producing a genesis alloc fragment with
//! the contract bytecode, pre-staked balances, and the aggregate account
//! balance.

pub mod cli;
pub mod constants;
pub mod contract;
pub mod errors;
pub mod genesis;
pub mod output;
pub mod slots;
