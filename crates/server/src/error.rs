// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP error mapping for the catalog API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;
use vitrine_store::StoreError;

/// Error wrapper for converting store errors to HTTP responses.
///
/// Error bodies have the format `{ "erro": "..." }`.
#[derive(Debug)]
pub struct ApiError(pub StoreError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StoreError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                "Dados do produto não podem ser vazios.",
            ),
            StoreError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao ler o arquivo de produtos.",
            ),
            StoreError::Corruption(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao interpretar os dados dos produtos.",
            ),
        };

        error!("request failed: {}", self.0);

        let body = serde_json::json!({ "erro": message });
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}
