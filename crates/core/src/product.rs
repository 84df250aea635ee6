// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Product record type
//!
//! A product is an open JSON object supplied by the caller plus a
//! store-assigned `idProduto`. All caller-supplied fields round-trip
//! unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied product payload, before the store assigns an identifier
pub type DraftProduct = Map<String, Value>;

/// A stored product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, unique across the catalog
    #[serde(rename = "idProduto")]
    pub id: u64,
    /// All remaining caller-supplied fields, passed through opaquely
    #[serde(flatten)]
    pub fields: DraftProduct,
}

impl Product {
    /// Build a product from a draft payload and an assigned identifier.
    /// A caller-supplied `idProduto` field is discarded; the store owns it.
    pub fn from_draft(id: u64, mut draft: DraftProduct) -> Self {
        draft.remove("idProduto");
        Self { id, fields: draft }
    }

    /// The product's category name, if present and non-empty
    pub fn categoria(&self) -> Option<&str> {
        self.fields
            .get("categoria")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
#[path = "product_tests.rs"]
mod tests;
