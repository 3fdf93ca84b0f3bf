//! Proposal storage and id assignment.
//!
//! A proposal is observable in three states: Created (on creation), Active
//! while `current_height < end_height`, Closed from `end_height` on. No
//! Passed/Rejected/Executed transition exists here; pass/fail evaluation is
//! left to an external caller reading the raw tallies.

use agora_types::{Address, BlockHeight, ProposalId, TokenAmount};
use std::collections::HashMap;

/// Maximum proposal title length in characters.
pub const MAX_TITLE_LEN: usize = 256;

/// A governance proposal with its running tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    /// Unique proposal ID, assigned in strictly increasing order from 0
    pub id: ProposalId,
    /// Proposer address
    pub proposer: Address,
    /// Title, at most [`MAX_TITLE_LEN`] characters
    pub title: String,
    /// Height at which voting opens
    pub start_height: BlockHeight,
    /// Height at which voting closes (exclusive)
    pub end_height: BlockHeight,
    /// Running sum of supporting vote power
    pub votes_for: TokenAmount,
    /// Running sum of opposing vote power
    pub votes_against: TokenAmount,
    /// Whether the proposal has been executed. No operation in this ledger
    /// sets it; it is a declared extension point for a future execution layer.
    pub executed: bool,
}

impl Proposal {
    /// Create a new proposal with zeroed tallies.
    ///
    /// Over-long titles are truncated on a char boundary. A zero voting
    /// period still yields a one-block window, so `end_height > start_height`
    /// holds by construction.
    pub fn new(
        id: ProposalId,
        proposer: Address,
        title: String,
        voting_period: u64,
        current_height: BlockHeight,
    ) -> Self {
        let title = match title.char_indices().nth(MAX_TITLE_LEN) {
            Some((idx, _)) => {
                tracing::warn!(
                    "Proposal {} title truncated to {} characters",
                    id,
                    MAX_TITLE_LEN
                );
                title[..idx].to_string()
            }
            None => title,
        };

        Self {
            id,
            proposer,
            title,
            start_height: current_height,
            end_height: current_height.saturating_add(voting_period.max(1)),
            votes_for: 0,
            votes_against: 0,
            executed: false,
        }
    }

    /// Check if voting is open at the given height.
    pub fn is_active(&self, current_height: BlockHeight) -> bool {
        current_height < self.end_height
    }

    /// Check if voting has closed at the given height.
    pub fn is_closed(&self, current_height: BlockHeight) -> bool {
        !self.is_active(current_height)
    }

    /// Get total votes cast.
    pub fn total_votes(&self) -> TokenAmount {
        self.votes_for.saturating_add(self.votes_against)
    }
}

/// Registry owning all proposals and the id sequence.
#[derive(Debug, Default)]
pub struct ProposalStore {
    proposals: HashMap<ProposalId, Proposal>,
    next_id: ProposalId,
}

impl ProposalStore {
    /// Create an empty store. Ids start at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new proposal and return it.
    ///
    /// The sequence counter advances by exactly one; callers must perform
    /// any precondition checks before calling so a failed create never
    /// consumes an id.
    pub fn create(
        &mut self,
        proposer: Address,
        title: String,
        voting_period: u64,
        current_height: BlockHeight,
    ) -> &Proposal {
        let id = self.next_id;
        self.next_id += 1;

        let proposal = Proposal::new(id, proposer, title, voting_period, current_height);
        &*self.proposals.entry(id).or_insert(proposal)
    }

    /// Get a proposal.
    pub fn get(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Get a proposal mutably.
    pub fn get_mut(&mut self, id: ProposalId) -> Option<&mut Proposal> {
        self.proposals.get_mut(&id)
    }

    /// Number of proposals created so far.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    /// Check if no proposals exist.
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// The id the next successful create will be assigned.
    pub fn next_id(&self) -> ProposalId {
        self.next_id
    }

    /// Get proposals whose voting window is open at the given height.
    pub fn active(&self, current_height: BlockHeight) -> Vec<&Proposal> {
        self.proposals
            .values()
            .filter(|p| p.is_active(current_height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_creation() {
        let proposal = Proposal::new(0, Address::ZERO, "Test Proposal".to_string(), 100, 50);

        assert_eq!(proposal.id, 0);
        assert_eq!(proposal.proposer, Address::ZERO);
        assert_eq!(proposal.start_height, 50);
        assert_eq!(proposal.end_height, 150);
        assert_eq!(proposal.votes_for, 0);
        assert_eq!(proposal.votes_against, 0);
        assert!(!proposal.executed);
        assert!(proposal.end_height > proposal.start_height);
    }

    #[test]
    fn test_zero_voting_period_still_has_window() {
        let proposal = Proposal::new(0, Address::ZERO, "Test".to_string(), 0, 50);
        assert!(proposal.end_height > proposal.start_height);
    }

    #[test]
    fn test_title_truncated_to_max_len() {
        let long = "x".repeat(MAX_TITLE_LEN + 50);
        let proposal = Proposal::new(0, Address::ZERO, long, 100, 0);
        assert_eq!(proposal.title.chars().count(), MAX_TITLE_LEN);

        // Truncation lands on a char boundary for multibyte titles too
        let long_multibyte = "é".repeat(MAX_TITLE_LEN + 1);
        let proposal = Proposal::new(1, Address::ZERO, long_multibyte, 100, 0);
        assert_eq!(proposal.title.chars().count(), MAX_TITLE_LEN);
    }

    #[test]
    fn test_active_window() {
        let proposal = Proposal::new(0, Address::ZERO, "Test".to_string(), 100, 50);

        assert!(proposal.is_active(50));
        assert!(proposal.is_active(149));
        assert!(proposal.is_closed(150));
        assert!(proposal.is_closed(151));
    }

    #[test]
    fn test_store_assigns_gapless_ids_from_zero() {
        let mut store = ProposalStore::new();

        let a = store.create(Address::ZERO, "A".to_string(), 100, 0).id;
        let b = store.create(Address::ZERO, "B".to_string(), 100, 0).id;
        let c = store.create(Address::ZERO, "C".to_string(), 100, 0).id;

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_store_lookup() {
        let mut store = ProposalStore::new();
        assert!(store.is_empty());
        assert!(store.get(0).is_none());

        let created = store.create(Address::from_bytes([1u8; 20]), "Budget".to_string(), 100, 50);
        assert_eq!(created.end_height, 150);
        let id = created.id;

        let proposal = store.get(id).unwrap();
        assert_eq!(proposal.title, "Budget");
        assert_eq!(proposal.end_height, 150);
    }

    #[test]
    fn test_active_filter() {
        let mut store = ProposalStore::new();
        store.create(Address::ZERO, "Short".to_string(), 10, 0);
        store.create(Address::ZERO, "Long".to_string(), 100, 0);

        assert_eq!(store.active(5).len(), 2);
        assert_eq!(store.active(50).len(), 1);
        assert_eq!(store.active(100).len(), 0);
    }
}
