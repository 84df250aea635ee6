// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vitrine-server: HTTP façade over the catalog core
//!
//! Thin plumbing: routing, payload shape validation, CORS, and the mapping
//! from store outcomes to status codes. All catalog semantics live in
//! vitrine-store and vitrine-core.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use vitrine_notify::ProductNotifier;
use vitrine_store::RecordStore;

pub use error::ApiError;
pub use handlers::{create_product, list_categories, list_products};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub notifier: Arc<dyn ProductNotifier>,
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/produtos", get(list_products).post(create_product))
        .route("/categorias", get(list_categories))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
