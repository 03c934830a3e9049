//! # Domain Module
//!
//! Business logic for the account service, independent of HTTP.
//!
//! ## Module Organization
//!
//! - **models**: the `Account` entity and its per-account guard
//! - **account_registry**: the append-only registry of accounts
//! - **account_service**: runs registry operations on worker tasks and maps
//!   their results onto the status vocabulary
//! - **commands**: inputs accepted by the account service
//! - **outcome**: the status vocabulary returned to clients
//!
//! ## Business Rules
//!
//! - Identifiers are assigned densely from 0 and never reused
//! - Amounts are not validated; balances may go negative
//! - An unknown account is a bad request for deposit and withdraw, but an
//!   internal error for a balance query

pub mod account_registry;
pub mod account_service;
pub mod commands;
pub mod models;
pub mod outcome;

pub use account_registry::{AccountRegistry, RegistryError};
pub use account_service::AccountService;
pub use models::account::{Account, AccountId};
pub use outcome::AccountOutcome;
