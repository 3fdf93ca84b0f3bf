//! Agora Types - Core type definitions for the Agora governance ledger.
//!
//! This crate provides the fundamental types used throughout the ledger:
//! - Addresses (20-byte, Bech32m encoded)
//! - Block height, token amount and proposal id units

pub mod address;
pub mod error;

pub use address::Address;
pub use error::TypesError;

/// Height on the external monotonic clock supplied by the execution context.
pub type BlockHeight = u64;

/// Token balance / voting power unit.
pub type TokenAmount = u128;

/// Proposal identifier, assigned in strictly increasing order from 0.
pub type ProposalId = u64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Address, BlockHeight, ProposalId, TokenAmount, TypesError};
}
