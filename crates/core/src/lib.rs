// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vitrine-core: Core library for the vitrine catalog service
//!
//! This crate provides:
//! - The product record type and caller-supplied draft payloads
//! - The pure category projection over a product snapshot
//! - Service configuration loaded from the environment

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod category;
pub mod config;
pub mod product;

// Re-exports
pub use category::{derive_categories, Category};
pub use config::Config;
pub use product::{DraftProduct, Product};
