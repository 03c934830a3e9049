use parking_lot::Mutex;
use tracing::info;

/// Identifier of an account; equal to its position in the registry.
///
/// Signed so that identifiers arriving from the outside world (e.g. `-1`)
/// can be represented and rejected by the registry lookup.
pub type AccountId = i64;

/// A single bank account.
///
/// The balance sits behind the account's own guard, so every read and every
/// mutation of one account is serialized while different accounts proceed
/// independently.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Mutex<f64>,
}

impl Account {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            balance: Mutex::new(0.0),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Add `amount` to the balance and return the new balance
    pub fn deposit(&self, amount: f64) -> f64 {
        let mut balance = self.balance.lock();
        *balance += amount;
        info!("deposit {} at account id: {}", amount, self.id);
        *balance
    }

    /// Subtract `amount` from the balance and return the new balance.
    /// The balance is allowed to go negative.
    pub fn withdraw(&self, amount: f64) -> f64 {
        let mut balance = self.balance.lock();
        *balance -= amount;
        info!("withdraw {} from account id: {}", amount, self.id);
        *balance
    }

    pub fn balance(&self) -> f64 {
        let balance = *self.balance.lock();
        info!("show balance {} from account id: {}", balance, self.id);
        balance
    }
}
