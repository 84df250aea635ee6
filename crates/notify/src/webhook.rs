// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Webhook notifier for newly created products

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use vitrine_core::Product;

/// Placeholder value that marks the sink URL as unconfigured
pub const WEBHOOK_PLACEHOLDER: &str = "URL_DO_SEU_WEBHOOK_N8N_AQUI";

/// Header telling ngrok to skip its browser interstitial page
const NGROK_SKIP_HEADER: &str = "ngrok-skip-browser-warning";

/// Errors that can occur delivering a notification (logged, never surfaced)
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Adapter trait for product-created notifications.
///
/// `notify` is infallible by contract: implementations contain their own
/// failures so the create path can never be affected.
#[async_trait]
pub trait ProductNotifier: Send + Sync + 'static {
    /// Inform the sink of a newly created product
    async fn notify(&self, product: &Product);
}

/// Notifier that POSTs the full product payload to a configured webhook
pub struct WebhookNotifier {
    http: Client,
    url: Option<String>,
}

impl WebhookNotifier {
    /// Create a notifier for the given sink URL.
    ///
    /// An unset, empty, or still-placeholder URL disables dispatch.
    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let url = url.filter(|u| !u.is_empty() && u != WEBHOOK_PLACEHOLDER);
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }

    /// Whether a sink is configured
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    async fn post(&self, url: &str, product: &Product) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(url)
            .header(NGROK_SKIP_HEADER, "true")
            .json(product)
            .send()
            .await?;
        response.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl ProductNotifier for WebhookNotifier {
    async fn notify(&self, product: &Product) {
        let Some(url) = &self.url else {
            warn!("webhook url not configured, skipping notification");
            return;
        };

        debug!(id = product.id, "sending product webhook");
        match self.post(url, product).await {
            Ok(()) => info!(id = product.id, "webhook delivered"),
            Err(e) => error!(id = product.id, "webhook delivery failed: {}", e),
        }
    }
}

/// Hand a created product off to the notifier without awaiting delivery.
///
/// The spawned task owns its copy of the product; the caller's response
/// path is never delayed or failed by the sink.
pub fn dispatch(notifier: Arc<dyn ProductNotifier>, product: Product) {
    tokio::spawn(async move {
        notifier.notify(&product).await;
    });
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
