//! Wire types shared between the account service and its clients.

use serde::{Deserialize, Serialize};

/// Body of `POST /accounts/:id/deposit` and `POST /accounts/:id/withdraw`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRequest {
    /// Amount to move; sign and magnitude are not checked by the service.
    /// A body without the field is treated as an amount of zero.
    #[serde(default)]
    pub amount: f64,
}

/// Plain-text status bodies returned by every account endpoint
pub mod status {
    pub const GOOD: &str = "good";
    pub const BAD_REQUEST: &str = "bad request";
    pub const INTERNAL_ERROR: &str = "internal error";
    pub const TIMEOUT: &str = "The waiting time has been exceeded";

    const BALANCE_PREFIX: &str = "balance is: ";

    /// Render the body of a successful balance query
    pub fn balance_message(balance: f64) -> String {
        format!("{}{}", BALANCE_PREFIX, balance)
    }

    /// Extract the balance from a `balance is: <n>` body
    pub fn parse_balance_message(body: &str) -> Option<f64> {
        body.strip_prefix(BALANCE_PREFIX)?.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_request_parses_integer_and_fraction() {
        let whole: AmountRequest = serde_json::from_str(r#"{"amount": 100}"#).unwrap();
        assert_eq!(whole.amount, 100.0);

        let fraction: AmountRequest = serde_json::from_str(r#"{"amount": -2.5}"#).unwrap();
        assert_eq!(fraction.amount, -2.5);
    }

    #[test]
    fn test_amount_request_missing_field_defaults_to_zero() {
        let request: AmountRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.amount, 0.0);
    }

    #[test]
    fn test_amount_request_rejects_non_numeric_amount() {
        assert!(serde_json::from_str::<AmountRequest>(r#"{"amount": "ten"}"#).is_err());
        assert!(serde_json::from_str::<AmountRequest>("not json").is_err());
    }

    #[test]
    fn test_balance_message_uses_shortest_decimal_form() {
        assert_eq!(status::balance_message(0.0), "balance is: 0");
        assert_eq!(status::balance_message(30.0), "balance is: 30");
        assert_eq!(status::balance_message(12.5), "balance is: 12.5");
        assert_eq!(status::balance_message(-3.0), "balance is: -3");
    }

    #[test]
    fn test_parse_balance_message() {
        assert_eq!(status::parse_balance_message("balance is: 42.25"), Some(42.25));
        assert_eq!(status::parse_balance_message("good"), None);
    }
}
