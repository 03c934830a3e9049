//! Domain-level command and query types.
//! The REST layer maps path parameters and request bodies onto these before
//! handing them to the account service.

pub mod accounts {
    use crate::domain::models::account::AccountId;

    /// Add money to an account.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DepositCommand {
        pub account_id: AccountId,
        pub amount: f64,
    }

    /// Take money out of an account.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct WithdrawCommand {
        pub account_id: AccountId,
        pub amount: f64,
    }

    /// Read the current balance of an account.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct BalanceQuery {
        pub account_id: AccountId,
    }
}
