// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vitrine-notify: Best-effort propagation of created products
//!
//! A create operation's success must never depend on the automation
//! sink's health: dispatch is fire-and-forget and failures are logged,
//! never surfaced.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod webhook;

pub use webhook::{dispatch, NotifyError, ProductNotifier, WebhookNotifier, WEBHOOK_PLACEHOLDER};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifier;
