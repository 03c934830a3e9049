use std::fmt;

use shared::status;

/// Result of an account operation as seen by a client.
///
/// Each variant renders to one entry of the fixed status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountOutcome {
    Good,
    BadRequest,
    InternalError,
    Balance(f64),
    Timeout,
}

impl AccountOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AccountOutcome::Good | AccountOutcome::Balance(_))
    }
}

impl fmt::Display for AccountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountOutcome::Good => f.write_str(status::GOOD),
            AccountOutcome::BadRequest => f.write_str(status::BAD_REQUEST),
            AccountOutcome::InternalError => f.write_str(status::INTERNAL_ERROR),
            AccountOutcome::Balance(balance) => f.write_str(&status::balance_message(*balance)),
            AccountOutcome::Timeout => f.write_str(status::TIMEOUT),
        }
    }
}
