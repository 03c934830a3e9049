//! # IO Module
//!
//! Interface layer that exposes the account service to the outside world.
//! Currently only the REST API lives here.

pub mod rest;
