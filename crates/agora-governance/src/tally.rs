//! Tally application.
//!
//! Adds an accepted vote's power to one side of a proposal's running tally.
//! Runs in the same atomic step as the vote ledger insert; no observer may
//! see one write without the other.

use crate::proposal::Proposal;
use agora_types::TokenAmount;

/// Apply an accepted vote to the proposal's aggregate counts.
pub fn apply(proposal: &mut Proposal, support: bool, power: TokenAmount) {
    if support {
        proposal.votes_for = proposal.votes_for.saturating_add(power);
    } else {
        proposal.votes_against = proposal.votes_against.saturating_add(power);
    }
}
