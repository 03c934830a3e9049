//! # REST API for Accounts
//!
//! Endpoints for creating accounts, moving money and reading balances.
//! Every response body is one entry of the status vocabulary.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::AmountRequest;
use tracing::{debug, info};

use crate::domain::commands::accounts::{BalanceQuery, DepositCommand, WithdrawCommand};
use crate::domain::{AccountId, AccountOutcome};
use crate::AppState;

impl AccountOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountOutcome::Good | AccountOutcome::Balance(_) => StatusCode::OK,
            AccountOutcome::BadRequest => StatusCode::BAD_REQUEST,
            AccountOutcome::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            AccountOutcome::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for AccountOutcome {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Take the raw `:id` segment, or `None` when it could not be decoded
fn path_segment(path: Result<Path<String>, PathRejection>) -> Option<String> {
    match path {
        Ok(Path(raw)) => Some(raw),
        Err(rejection) => {
            debug!("Rejected path: {}", rejection.body_text());
            None
        }
    }
}

/// Parse the `:id` path segment as a decimal integer
fn parse_account_id(raw: &str) -> Option<AccountId> {
    match raw.parse::<AccountId>() {
        Ok(id) => Some(id),
        Err(_) => {
            debug!("id couldn't convert to a number: {}", raw);
            None
        }
    }
}

fn parse_amount(body: Result<Json<AmountRequest>, JsonRejection>) -> Option<f64> {
    match body {
        Ok(Json(request)) => Some(request.amount),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection.body_text());
            None
        }
    }
}

/// Create a new account
pub async fn create_account(State(state): State<AppState>) -> AccountOutcome {
    info!("POST /accounts");
    state.account_service.create_account().await
}

/// Deposit money into an account
pub async fn deposit(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> AccountOutcome {
    let raw_id = path_segment(path);
    info!("POST /accounts/{}/deposit", raw_id.as_deref().unwrap_or("<invalid>"));

    let Some(amount) = parse_amount(body) else {
        return AccountOutcome::BadRequest;
    };
    let Some(account_id) = raw_id.as_deref().and_then(parse_account_id) else {
        return AccountOutcome::BadRequest;
    };

    state
        .account_service
        .deposit(DepositCommand { account_id, amount })
        .await
}

/// Withdraw money from an account
pub async fn withdraw(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> AccountOutcome {
    let raw_id = path_segment(path);
    info!("POST /accounts/{}/withdraw", raw_id.as_deref().unwrap_or("<invalid>"));

    let Some(amount) = parse_amount(body) else {
        return AccountOutcome::BadRequest;
    };
    let Some(account_id) = raw_id.as_deref().and_then(parse_account_id) else {
        return AccountOutcome::BadRequest;
    };

    state
        .account_service
        .withdraw(WithdrawCommand { account_id, amount })
        .await
}

/// Get the current balance of an account
pub async fn balance(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AccountOutcome {
    let raw_id = path_segment(path);
    info!("GET /accounts/{}/balance", raw_id.as_deref().unwrap_or("<invalid>"));

    let Some(account_id) = raw_id.as_deref().and_then(parse_account_id) else {
        return AccountOutcome::BadRequest;
    };

    state
        .account_service
        .balance(BalanceQuery { account_id })
        .await
}
