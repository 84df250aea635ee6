// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notifier for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::webhook::ProductNotifier;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vitrine_core::Product;

/// Fake notifier that records every product it is handed
#[derive(Clone, Default)]
pub struct FakeNotifier {
    calls: Arc<Mutex<Vec<Product>>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded notifications
    pub fn calls(&self) -> Vec<Product> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ProductNotifier for FakeNotifier {
    async fn notify(&self, product: &Product) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(product.clone());
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
