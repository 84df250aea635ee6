// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP route handlers for the catalog API

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use vitrine_core::{derive_categories, Category, Product};
use vitrine_notify::dispatch;
use vitrine_store::StoreError;

use crate::error::ApiError;
use crate::AppState;

/// Handle GET /produtos
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list_all().await?;
    Ok(Json(products))
}

/// Handle GET /categorias
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let products = state.store.list_all().await?;
    Ok(Json(derive_categories(&products)))
}

/// Handle POST /produtos
///
/// The webhook is dispatched after the store commit and never awaited:
/// the 201 response does not depend on the sink being reachable.
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = body
        .as_object()
        .cloned()
        .ok_or(StoreError::InvalidInput)?;

    let product = state.store.append(draft).await?;

    dispatch(state.notifier.clone(), product.clone());

    Ok((StatusCode::CREATED, Json(product)))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
