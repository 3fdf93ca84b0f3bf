//! Cast-vote ledger.
//!
//! Enforces at-most-one-vote-per-(proposal, account). Records are immutable
//! once written; re-voting is a hard error, never an overwrite.

use crate::error::LedgerError;
use agora_types::{Address, ProposalId, TokenAmount};
use std::collections::HashMap;

/// A single cast vote. Created once per key, never updated or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRecord {
    /// True for a supporting vote, false for an opposing one
    pub support: bool,
    /// Voting power committed to this vote
    pub power: TokenAmount,
}

/// Ledger of all cast votes, keyed by (proposal, voter).
#[derive(Debug, Default)]
pub struct VoteLedger {
    votes: HashMap<(ProposalId, Address), VoteRecord>,
}

impl VoteLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an account has voted on a proposal.
    pub fn has_voted(&self, proposal_id: ProposalId, voter: &Address) -> bool {
        self.votes.contains_key(&(proposal_id, *voter))
    }

    /// Get a cast vote.
    pub fn get(&self, proposal_id: ProposalId, voter: &Address) -> Option<&VoteRecord> {
        self.votes.get(&(proposal_id, *voter))
    }

    /// Record a vote.
    ///
    /// # Errors
    /// Returns `AlreadyVoted` if a record already exists for the key; the
    /// existing record is left untouched.
    pub fn record(
        &mut self,
        proposal_id: ProposalId,
        voter: Address,
        support: bool,
        power: TokenAmount,
    ) -> Result<(), LedgerError> {
        if self.votes.contains_key(&(proposal_id, voter)) {
            return Err(LedgerError::AlreadyVoted);
        }

        self.votes
            .insert((proposal_id, voter), VoteRecord { support, power });
        Ok(())
    }

    /// Iterate over all votes cast on a proposal.
    ///
    /// This is the read surface a quorum/threshold evaluator consumes.
    pub fn proposal_votes(
        &self,
        proposal_id: ProposalId,
    ) -> impl Iterator<Item = (&Address, &VoteRecord)> {
        self.votes
            .iter()
            .filter(move |((id, _), _)| *id == proposal_id)
            .map(|((_, voter), record)| (voter, record))
    }

    /// Total number of votes across all proposals.
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    /// Check if no votes have been cast.
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut ledger = VoteLedger::new();
        let voter = Address::from_bytes([1u8; 20]);

        assert!(!ledger.has_voted(0, &voter));
        ledger.record(0, voter, true, 50).unwrap();

        assert!(ledger.has_voted(0, &voter));
        let record = ledger.get(0, &voter).unwrap();
        assert!(record.support);
        assert_eq!(record.power, 50);
    }

    #[test]
    fn test_duplicate_vote_rejected() {
        let mut ledger = VoteLedger::new();
        let voter = Address::from_bytes([1u8; 20]);

        ledger.record(3, voter, true, 50).unwrap();
        let err = ledger.record(3, voter, false, 10).unwrap_err();
        assert_eq!(err, LedgerError::AlreadyVoted);

        // Original record is untouched
        let record = ledger.get(3, &voter).unwrap();
        assert!(record.support);
        assert_eq!(record.power, 50);
    }

    #[test]
    fn test_same_voter_different_proposals() {
        let mut ledger = VoteLedger::new();
        let voter = Address::from_bytes([1u8; 20]);

        ledger.record(0, voter, true, 10).unwrap();
        ledger.record(1, voter, false, 20).unwrap();

        assert!(ledger.has_voted(0, &voter));
        assert!(ledger.has_voted(1, &voter));
        assert!(!ledger.has_voted(2, &voter));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_proposal_votes_iterator() {
        let mut ledger = VoteLedger::new();
        let a = Address::from_bytes([1u8; 20]);
        let b = Address::from_bytes([2u8; 20]);

        ledger.record(0, a, true, 10).unwrap();
        ledger.record(0, b, false, 20).unwrap();
        ledger.record(1, a, true, 30).unwrap();

        let total: u128 = ledger.proposal_votes(0).map(|(_, r)| r.power).sum();
        assert_eq!(total, 30);
        assert_eq!(ledger.proposal_votes(1).count(), 1);
    }
}
