// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for behavioral specs

use serde_json::json;
use vitrine_core::DraftProduct;
use vitrine_store::RecordStore;

/// A draft product with a name and optional category
pub fn draft(nome: &str, categoria: Option<&str>) -> DraftProduct {
    let mut map = DraftProduct::new();
    map.insert("nome".to_string(), json!(nome));
    if let Some(c) = categoria {
        map.insert("categoria".to_string(), json!(c));
    }
    map
}

/// A fresh store backed by a temp directory (kept alive by the returned guard)
pub async fn temp_store() -> (tempfile::TempDir, RecordStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open(dir.path().join("produtos.json"))
        .await
        .unwrap();
    (dir, store)
}
