//! Process-wide registry of accounts.
//!
//! The registry is a dense, append-only sequence: an account's identifier is
//! its index, identifiers are handed out in creation order starting at 0, and
//! nothing is ever removed.
//!
//! Two levels of locking keep it consistent:
//! - the registry guard (`RwLock` over the sequence) is taken exclusively to
//!   append and shared to look an account up;
//! - each account's own guard serializes reads and writes of its balance.
//!
//! The registry guard is always released before an account guard is taken,
//! and no operation touches two accounts, so the two can never deadlock.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use super::models::account::{Account, AccountId};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("account {0} not found")]
    NotFound(AccountId),
}

#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: RwLock<Vec<Arc<Account>>>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new account with a zero balance and return its identifier
    pub fn create(&self) -> AccountId {
        let mut accounts = self.accounts.write();
        let id = accounts.len() as AccountId;
        accounts.push(Arc::new(Account::new(id)));
        info!("create new account with id: {}", id);
        id
    }

    /// Resolve an identifier to its account.
    ///
    /// Negative identifiers and identifiers at or past the current length are
    /// `NotFound`. The returned handle stays valid after the shared guard is
    /// released because slots are never rewritten.
    pub fn lookup(&self, id: AccountId) -> Result<Arc<Account>, RegistryError> {
        let accounts = self.accounts.read();
        usize::try_from(id)
            .ok()
            .and_then(|index| accounts.get(index))
            .cloned()
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn deposit(&self, id: AccountId, amount: f64) -> Result<(), RegistryError> {
        self.lookup(id)?.deposit(amount);
        Ok(())
    }

    pub fn withdraw(&self, id: AccountId, amount: f64) -> Result<(), RegistryError> {
        self.lookup(id)?.withdraw(amount);
        Ok(())
    }

    pub fn balance(&self, id: AccountId) -> Result<f64, RegistryError> {
        Ok(self.lookup(id)?.balance())
    }

    /// Number of accounts created so far
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_create_assigns_dense_identifiers() {
        let registry = AccountRegistry::new();
        assert!(registry.is_empty());

        let ids: Vec<AccountId> = (0..5).map(|_| registry.create()).collect();

        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(registry.len(), 5);
        for id in ids {
            assert_eq!(registry.lookup(id).unwrap().id(), id);
        }
    }

    #[test]
    fn test_lookup_out_of_range_is_not_found() {
        let registry = AccountRegistry::new();
        registry.create();

        assert_eq!(registry.lookup(-1).unwrap_err(), RegistryError::NotFound(-1));
        assert_eq!(registry.lookup(1).unwrap_err(), RegistryError::NotFound(1));
        assert_eq!(
            registry.lookup(AccountId::MAX).unwrap_err(),
            RegistryError::NotFound(AccountId::MAX)
        );
    }

    #[test]
    fn test_operations_on_unknown_account_fail() {
        let registry = AccountRegistry::new();

        assert_eq!(registry.deposit(7, 1.0), Err(RegistryError::NotFound(7)));
        assert_eq!(registry.withdraw(7, 1.0), Err(RegistryError::NotFound(7)));
        assert_eq!(registry.balance(7), Err(RegistryError::NotFound(7)));
    }

    #[test]
    fn test_new_account_has_zero_balance() {
        let registry = AccountRegistry::new();
        let id = registry.create();
        assert_eq!(registry.balance(id), Ok(0.0));
    }

    #[test]
    fn test_alternating_deposits_and_withdrawals_sum_up() {
        let registry = AccountRegistry::new();
        let id = registry.create();

        let deposits = [10.5, 20.25, 3.0, 100.0];
        let withdrawals = [1.5, 7.75, 50.0, 0.25];
        for (deposit, withdrawal) in deposits.iter().zip(withdrawals.iter()) {
            registry.deposit(id, *deposit).unwrap();
            registry.withdraw(id, *withdrawal).unwrap();
        }

        let expected: f64 = deposits.iter().sum::<f64>() - withdrawals.iter().sum::<f64>();
        assert!((registry.balance(id).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_accounts_are_independent() {
        let registry = AccountRegistry::new();
        let first = registry.create();
        let second = registry.create();

        registry.deposit(first, 40.0).unwrap();
        registry.withdraw(second, 15.0).unwrap();

        assert_eq!(registry.balance(first), Ok(40.0));
        assert_eq!(registry.balance(second), Ok(-15.0));
    }

    #[test]
    fn test_concurrent_creates_hand_out_each_id_once() {
        let registry = AccountRegistry::new();
        let threads = 8;
        let per_thread = 250;

        let ids: Vec<AccountId> = thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| (0..per_thread).map(|_| registry.create()).collect::<Vec<_>>())
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let total = threads * per_thread;
        let unique: HashSet<AccountId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), total);
        assert_eq!(unique.len(), total);
        assert_eq!(registry.len(), total);
        assert!(unique.iter().all(|id| (0..total as AccountId).contains(id)));
    }

    #[test]
    fn test_concurrent_deposits_and_withdrawals_cancel_out() {
        let registry = AccountRegistry::new();
        let id = registry.create();
        registry.deposit(id, 1000.0).unwrap();
        let rounds = 500;

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..rounds {
                        registry.deposit(id, 2.0).unwrap();
                    }
                });
                scope.spawn(|| {
                    for _ in 0..rounds {
                        registry.withdraw(id, 2.0).unwrap();
                    }
                });
            }
        });

        assert_eq!(registry.balance(id), Ok(1000.0));
    }

    #[test]
    fn test_lookup_races_with_create() {
        let registry = AccountRegistry::new();
        let first = registry.create();

        thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..1000 {
                    registry.create();
                }
            });
            scope.spawn(|| {
                for _ in 0..1000 {
                    registry.deposit(first, 1.0).unwrap();
                }
            });
        });

        assert_eq!(registry.len(), 1001);
        assert_eq!(registry.balance(first), Ok(1000.0));
    }
}
