//! Agora Governance - Proposal/vote ledger and tally engine.
//!
//! This crate provides:
//! - Proposal creation with monotonic, gapless id assignment
//! - One-vote-per-account vote ledger with running tallies
//! - Self-service voting power registry
//! - Quadratic cost arithmetic for vote pricing
//!
//! The ledger exposes raw tallies only; quorum/threshold evaluation and
//! execution of passed proposals belong to external consumers of the read
//! interface.

pub mod arithmetic;
pub mod balances;
pub mod context;
pub mod error;
pub mod ledger;
pub mod proposal;
pub mod tally;
pub mod votes;

pub use arithmetic::{integer_sqrt, max_votes_from_budget, quadratic_cost};
pub use balances::BalanceRegistry;
pub use context::CallContext;
pub use error::LedgerError;
pub use ledger::{GovernanceLedger, LedgerConfig};
pub use proposal::{Proposal, ProposalStore, MAX_TITLE_LEN};
pub use votes::{VoteLedger, VoteRecord};
