// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vitrined: the vitrine catalog HTTP service

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tracing::info;
use vitrine_core::Config;
use vitrine_notify::WebhookNotifier;
use vitrine_server::{router, AppState};
use vitrine_store::RecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let config = Config::from_env();
    info!("starting vitrined, snapshot at {}", config.data_path.display());

    let store = Arc::new(RecordStore::open(&config.data_path).await?);
    let notifier = Arc::new(WebhookNotifier::new(
        config.webhook_url.clone(),
        config.notify_timeout,
    )?);
    if !notifier.is_configured() {
        info!("no webhook url configured, notifications disabled");
    }

    let app = router(AppState { store, notifier });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("listening on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to install SIGTERM handler: {}", e);
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("received SIGINT, shutting down...");
        }
        _ = sigterm.recv() => {
            info!("received SIGTERM, shutting down...");
        }
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
