use agora_types::ProposalId;
use thiserror::Error;

/// Errors that can occur in ledger operations.
///
/// Every failure aborts the whole operation with zero state mutation; the
/// caller is responsible for resubmitting a corrected request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Proposer stake below the configured minimum")]
    InsufficientStake,

    #[error("Proposal not found: {0}")]
    ProposalNotFound(ProposalId),

    #[error("Voting period ended")]
    VotingClosed,

    #[error("Already voted")]
    AlreadyVoted,

    #[error("Requested voting power exceeds balance")]
    InvalidVotingPower,
}
