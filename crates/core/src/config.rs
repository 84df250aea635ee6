// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Default listening port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Default snapshot path when `VITRINE_DATA` is unset
pub const DEFAULT_DATA_PATH: &str = "data/produtos.json";

/// Default outbound notification timeout in seconds
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listening port
    pub port: u16,
    /// Path to the product snapshot file
    pub data_path: PathBuf,
    /// Notification sink URL, exactly as configured (may be the placeholder)
    pub webhook_url: Option<String>,
    /// Timeout for the outbound notification call
    pub notify_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup (testable seam)
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let port = match get("PORT") {
            Some(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    warn!("PORT value {:?} is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let data_path = get("VITRINE_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let notify_timeout = match get("VITRINE_NOTIFY_TIMEOUT_SECS") {
            Some(raw) => match raw.parse() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    warn!(
                        "VITRINE_NOTIFY_TIMEOUT_SECS value {:?} is not a number, using {}",
                        raw, DEFAULT_NOTIFY_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS)
                }
            },
            None => Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS),
        };

        Self {
            port,
            data_path,
            webhook_url: get("N8N_WEBHOOK_URL"),
            notify_timeout,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
