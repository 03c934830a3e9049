//! # REST API Interface Layer
//!
//! HTTP endpoints for the account service. This layer:
//! - extracts path parameters and JSON bodies
//! - turns malformed input into `bad request`
//! - hands well-formed requests to the account service
//! - renders the resulting outcome as a plain-text response

pub mod account_apis;
