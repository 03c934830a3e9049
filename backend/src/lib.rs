//! # Accounts Backend
//!
//! An HTTP service keeping bank accounts in memory for the lifetime of the
//! process.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers)
//!     ↓
//! Account service (worker per operation, oneshot rendezvous)
//!     ↓
//! Account registry (registry guard, per-account guards)
//! ```
//!
//! This module wires the layers together: it builds the application state,
//! the router, and runs the server until a shutdown signal arrives.

pub mod config;
pub mod domain;
pub mod io;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, warn, Level};

use crate::config::AppConfig;
use crate::domain::{AccountRegistry, AccountService};
use crate::io::rest::account_apis;

/// Main application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: AccountService,
}

/// Build the registry and the services on top of it
pub fn initialize_backend(config: &AppConfig) -> AppState {
    info!("Setting up account registry");
    let registry = Arc::new(AccountRegistry::new());

    info!("Setting up account service");
    let account_service =
        AccountService::new(registry).with_request_timeout(config.request_timeout());

    AppState { account_service }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/accounts", post(account_apis::create_account))
        .route("/accounts/:id/deposit", post(account_apis::deposit))
        .route("/accounts/:id/withdraw", post(account_apis::withdraw))
        .route("/accounts/:id/balance", get(account_apis::balance))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(app_state)
}

/// Serve `router` until `shutdown` resolves, then drain in-flight requests
/// for at most `drain_timeout` before giving up on them.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (drain_sender, drain_receiver) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = drain_receiver.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result??;
            return Ok(());
        }
        _ = shutdown => {}
    }

    info!("Gracefully shutting down...");
    let _ = drain_sender.send(());

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(result) => {
            result??;
            info!("All in-flight requests drained");
        }
        Err(_) => {
            warn!(
                "In-flight requests did not drain within {:?}; dropping connections",
                drain_timeout
            );
            server.abort();
        }
    }

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
