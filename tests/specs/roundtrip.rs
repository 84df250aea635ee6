// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs: persistence round-trips and derived views

use crate::prelude::{draft, temp_store};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use vitrine_core::derive_categories;
use vitrine_notify::{dispatch, FakeNotifier, ProductNotifier, WebhookNotifier};
use vitrine_store::RecordStore;

#[tokio::test]
async fn written_product_reads_back_deep_equal_plus_id() {
    let (_dir, store) = temp_store().await;

    let mut payload = draft("Caneca", Some("Cozinha"));
    payload.insert("preco".to_string(), json!(29.9));
    payload.insert("estoque".to_string(), json!({ "quantidade": 12 }));

    let stored = store.append(payload.clone()).await.unwrap();
    let products = store.list_all().await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0], stored);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].fields, payload);
}

#[tokio::test]
async fn snapshot_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("produtos.json");

    {
        let store = RecordStore::open(&path).await.unwrap();
        store.append(draft("Mesa", Some("Sala"))).await.unwrap();
    }

    let store = RecordStore::open(&path).await.unwrap();
    let products = store.list_all().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].categoria(), Some("Sala"));

    // Identifier assignment continues from the durable max
    let next = store.append(draft("Cadeira", None)).await.unwrap();
    assert_eq!(next.id, 2);
}

#[tokio::test]
async fn categories_derive_from_live_snapshot() {
    let (_dir, store) = temp_store().await;
    for categoria in ["A", "B", "A", "C"] {
        store.append(draft("p", Some(categoria))).await.unwrap();
    }
    store.append(draft("sem categoria", None)).await.unwrap();

    let products = store.list_all().await.unwrap();
    let categories = derive_categories(&products);

    let value = serde_json::to_value(&categories).unwrap();
    assert_eq!(
        value,
        json!([
            { "id": 1, "nome": "A" },
            { "id": 2, "nome": "B" },
            { "id": 3, "nome": "C" },
        ])
    );
}

#[tokio::test]
async fn create_survives_unreachable_sink() {
    let (_dir, store) = temp_store().await;

    let stored = store.append(draft("Mesa", None)).await.unwrap();

    let notifier = WebhookNotifier::new(
        Some("http://127.0.0.1:9/webhook".to_string()),
        Duration::from_secs(1),
    )
    .unwrap();
    dispatch(Arc::new(notifier), stored.clone());

    // The store reflects the record regardless of the sink's fate
    let products = store.list_all().await.unwrap();
    assert_eq!(products, vec![stored]);
}

#[tokio::test]
async fn dispatch_hands_off_the_committed_record() {
    let (_dir, store) = temp_store().await;
    let stored = store.append(draft("Mesa", Some("Sala"))).await.unwrap();

    let fake = FakeNotifier::new();
    let notifier: Arc<dyn ProductNotifier> = Arc::new(fake.clone());
    dispatch(notifier, stored.clone());

    for _ in 0..100 {
        if !fake.calls().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(fake.calls(), vec![stored]);
}
