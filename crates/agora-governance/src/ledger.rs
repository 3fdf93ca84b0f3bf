//! Governance ledger facade.
//!
//! Owns all ledger state behind a single `RwLock` so every entry point is
//! externally atomic: `cast_vote`'s read-validate-write sequence holds the
//! write lock from first check to last write, which rules out lost tally
//! updates between concurrent votes on the same proposal and lets at most
//! one of two concurrent casts by the same account succeed.

use crate::balances::BalanceRegistry;
use crate::context::CallContext;
use crate::error::LedgerError;
use crate::proposal::{Proposal, ProposalStore};
use crate::votes::{VoteLedger, VoteRecord};
use crate::{arithmetic, tally};
use agora_types::{Address, ProposalId, TokenAmount};
use parking_lot::RwLock;

/// Ledger configuration.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Minimum balance required to create a proposal
    pub min_proposal_stake: TokenAmount,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_proposal_stake: 1_000,
        }
    }
}

#[derive(Debug, Default)]
struct LedgerState {
    proposals: ProposalStore,
    votes: VoteLedger,
    balances: BalanceRegistry,
}

/// The proposal/vote ledger with its running tallies.
#[derive(Debug)]
pub struct GovernanceLedger {
    config: LedgerConfig,
    inner: RwLock<LedgerState>,
}

impl GovernanceLedger {
    /// Create a ledger with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a ledger with a custom configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(LedgerState::default()),
        }
    }

    /// Overwrite the caller's voting power balance. Always succeeds.
    ///
    /// Self-service by design: there is no access control and no conservation
    /// law across accounts. A real token contract would replace this entry
    /// point while keeping [`get_voting_power`](Self::get_voting_power) as
    /// the read interface.
    pub fn register_tokens(
        &self,
        ctx: CallContext,
        amount: TokenAmount,
    ) -> Result<(), LedgerError> {
        let mut state = self.inner.write();
        state.balances.set_balance(ctx.caller, amount);
        tracing::debug!("Balance set: account={} amount={}", ctx.caller, amount);
        Ok(())
    }

    /// Get an account's voting power. Unknown accounts have 0.
    pub fn get_voting_power(&self, account: &Address) -> TokenAmount {
        self.inner.read().balances.voting_power(account)
    }

    /// Get a snapshot of a proposal.
    pub fn get_proposal(&self, id: ProposalId) -> Option<Proposal> {
        self.inner.read().proposals.get(id).cloned()
    }

    /// Check whether an account has voted on a proposal.
    pub fn has_voted(&self, proposal_id: ProposalId, account: &Address) -> bool {
        self.inner.read().votes.has_voted(proposal_id, account)
    }

    /// Snapshot of all votes cast on a proposal.
    pub fn proposal_votes(&self, proposal_id: ProposalId) -> Vec<(Address, VoteRecord)> {
        self.inner
            .read()
            .votes
            .proposal_votes(proposal_id)
            .map(|(voter, record)| (*voter, *record))
            .collect()
    }

    /// Quadratic cost of a vote amount. Advisory only; the ledger never
    /// deducts it.
    pub fn get_quadratic_cost(&self, amount: TokenAmount) -> TokenAmount {
        arithmetic::quadratic_cost(amount)
    }

    /// Create a proposal whose voting window opens at the current height.
    ///
    /// # Errors
    /// Returns `InsufficientStake` if the caller's balance is below the
    /// configured minimum; no id is consumed on failure.
    pub fn create_proposal(
        &self,
        ctx: CallContext,
        title: String,
        voting_period: u64,
    ) -> Result<ProposalId, LedgerError> {
        let mut state = self.inner.write();

        if state.balances.voting_power(&ctx.caller) < self.config.min_proposal_stake {
            return Err(LedgerError::InsufficientStake);
        }

        let proposal = state
            .proposals
            .create(ctx.caller, title, voting_period, ctx.current_height);
        let id = proposal.id;
        tracing::info!(
            "Proposal {} created by {} (voting ends at height {})",
            id,
            ctx.caller,
            proposal.end_height
        );
        Ok(id)
    }

    /// Cast a vote on a proposal.
    ///
    /// Validates against a consistent snapshot, then inserts the vote record
    /// and updates the tally as one indivisible unit.
    ///
    /// # Errors
    /// - `ProposalNotFound` if the id is unknown
    /// - `AlreadyVoted` if the caller already voted on this proposal
    /// - `VotingClosed` at or after the proposal's end height
    /// - `InvalidVotingPower` if `power` exceeds the caller's balance
    pub fn cast_vote(
        &self,
        ctx: CallContext,
        proposal_id: ProposalId,
        support: bool,
        power: TokenAmount,
    ) -> Result<(), LedgerError> {
        let mut guard = self.inner.write();
        let state = &mut *guard;

        let proposal = state
            .proposals
            .get_mut(proposal_id)
            .ok_or(LedgerError::ProposalNotFound(proposal_id))?;

        if state.votes.has_voted(proposal_id, &ctx.caller) {
            return Err(LedgerError::AlreadyVoted);
        }

        if proposal.is_closed(ctx.current_height) {
            return Err(LedgerError::VotingClosed);
        }

        if power > state.balances.voting_power(&ctx.caller) {
            return Err(LedgerError::InvalidVotingPower);
        }

        state.votes.record(proposal_id, ctx.caller, support, power)?;
        tally::apply(proposal, support, power);

        tracing::debug!(
            "Vote recorded: proposal={} voter={} support={} power={}",
            proposal_id,
            ctx.caller,
            support,
            power
        );
        Ok(())
    }
}

impl Default for GovernanceLedger {
    fn default() -> Self {
        Self::new()
    }
}
