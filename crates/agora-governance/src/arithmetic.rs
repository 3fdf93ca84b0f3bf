//! Quadratic vote pricing helpers.
//!
//! The ledger itself never deducts the quadratic cost from a balance; callers
//! who want quadratic pricing compute the cost here and pass the pre-priced
//! power into `cast_vote` themselves.

use agora_types::TokenAmount;

/// Calculate cost for quadratic voting.
///
/// In quadratic voting, cost = votes^2 (not linear), so expressing strong
/// preferences is more expensive. Saturates at the top of the amount range.
pub fn quadratic_cost(votes: TokenAmount) -> TokenAmount {
    votes.saturating_mul(votes)
}

/// Integer square root using Newton's method.
/// Returns floor(sqrt(n)).
pub fn integer_sqrt(n: TokenAmount) -> TokenAmount {
    // floor(sqrt(n)) = 1 for 1..=3; the Newton guess below needs n >= 4
    if n < 4 {
        return u128::from(n >= 1);
    }

    let mut x = n;
    let mut y = x / 2 + 1;

    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }

    x
}

/// Calculate maximum votes given a budget.
///
/// Returns floor(sqrt(budget)), the largest vote count whose quadratic cost
/// fits in the budget.
pub fn max_votes_from_budget(budget: TokenAmount) -> TokenAmount {
    integer_sqrt(budget)
}
