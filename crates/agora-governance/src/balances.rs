//! Voting power balances.
//!
//! Self-service registry: any account may overwrite its own entry. There is
//! no conservation law across accounts; a real token contract would replace
//! this surface while keeping `voting_power` as the read interface.

use agora_types::{Address, TokenAmount};
use std::collections::HashMap;

/// Account balance registry.
#[derive(Debug, Default)]
pub struct BalanceRegistry {
    balances: HashMap<Address, TokenAmount>,
}

impl BalanceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an account's voting power. Unknown accounts have 0.
    pub fn voting_power(&self, account: &Address) -> TokenAmount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Overwrite an account's balance. Always succeeds.
    pub fn set_balance(&mut self, account: Address, amount: TokenAmount) {
        self.balances.insert(account, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_account_has_zero_power() {
        let registry = BalanceRegistry::new();
        assert_eq!(registry.voting_power(&Address::from_bytes([1u8; 20])), 0);
    }

    #[test]
    fn test_set_balance_overwrites() {
        let mut registry = BalanceRegistry::new();
        let account = Address::from_bytes([1u8; 20]);

        registry.set_balance(account, 500);
        assert_eq!(registry.voting_power(&account), 500);

        // Later writes replace, they do not accumulate
        registry.set_balance(account, 20);
        assert_eq!(registry.voting_power(&account), 20);
    }

    #[test]
    fn test_balances_are_per_account() {
        let mut registry = BalanceRegistry::new();
        let a = Address::from_bytes([1u8; 20]);
        let b = Address::from_bytes([2u8; 20]);

        registry.set_balance(a, 1000);
        assert_eq!(registry.voting_power(&a), 1000);
        assert_eq!(registry.voting_power(&b), 0);
    }
}
