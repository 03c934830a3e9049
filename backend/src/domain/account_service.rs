//! Account service: the facade between the REST layer and the registry.
//!
//! Every operation is executed on its own worker task. The worker sends
//! exactly one `AccountOutcome` back over a oneshot channel and the caller
//! waits for it, optionally bounded by a per-request deadline.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use super::account_registry::AccountRegistry;
use super::commands::accounts::{BalanceQuery, DepositCommand, WithdrawCommand};
use super::outcome::AccountOutcome;

#[derive(Clone)]
pub struct AccountService {
    registry: Arc<AccountRegistry>,
    request_timeout: Option<Duration>,
}

impl AccountService {
    pub fn new(registry: Arc<AccountRegistry>) -> Self {
        Self {
            registry,
            request_timeout: None,
        }
    }

    /// Bound how long a caller waits for its worker. `None` waits forever.
    pub fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn registry(&self) -> &Arc<AccountRegistry> {
        &self.registry
    }

    /// Create an account.
    ///
    /// The append has completed by the time `Good` is returned, so the new
    /// identifier can be used immediately.
    pub async fn create_account(&self) -> AccountOutcome {
        let registry = Arc::clone(&self.registry);
        self.dispatch(move || {
            let id = registry.create();
            info!("Account {} is ready", id);
            AccountOutcome::Good
        })
        .await
    }

    pub async fn deposit(&self, command: DepositCommand) -> AccountOutcome {
        let registry = Arc::clone(&self.registry);
        self.dispatch(move || match registry.deposit(command.account_id, command.amount) {
            Ok(()) => AccountOutcome::Good,
            Err(e) => {
                debug!("Deposit rejected: {}", e);
                AccountOutcome::BadRequest
            }
        })
        .await
    }

    pub async fn withdraw(&self, command: WithdrawCommand) -> AccountOutcome {
        let registry = Arc::clone(&self.registry);
        self.dispatch(move || match registry.withdraw(command.account_id, command.amount) {
            Ok(()) => AccountOutcome::Good,
            Err(e) => {
                debug!("Withdraw rejected: {}", e);
                AccountOutcome::BadRequest
            }
        })
        .await
    }

    /// Query a balance. An unknown account maps to `InternalError` here,
    /// unlike deposit and withdraw.
    pub async fn balance(&self, query: BalanceQuery) -> AccountOutcome {
        let registry = Arc::clone(&self.registry);
        self.dispatch(move || match registry.balance(query.account_id) {
            Ok(balance) => AccountOutcome::Balance(balance),
            Err(e) => {
                debug!("Balance query failed: {}", e);
                AccountOutcome::InternalError
            }
        })
        .await
    }

    /// Run `operation` on a worker task and wait for its single outcome
    pub(crate) async fn dispatch<F>(&self, operation: F) -> AccountOutcome
    where
        F: FnOnce() -> AccountOutcome + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();

        tokio::spawn(async move {
            if sender.send(operation()).is_err() {
                debug!("Caller stopped waiting; discarding outcome");
            }
        });

        let received = match self.request_timeout {
            Some(deadline) => match tokio::time::timeout(deadline, receiver).await {
                Ok(received) => received,
                Err(_) => {
                    warn!("No outcome within {:?}", deadline);
                    return AccountOutcome::Timeout;
                }
            },
            None => receiver.await,
        };

        received.unwrap_or_else(|_| {
            error!("Worker finished without reporting an outcome");
            AccountOutcome::InternalError
        })
    }
}
