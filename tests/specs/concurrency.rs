// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrency specs: identifier uniqueness and lost-update freedom

use crate::prelude::{draft, temp_store};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_yield_distinct_sequential_ids() {
    let (_dir, store) = temp_store().await;
    let store = Arc::new(store);

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .append(draft(&format!("produto-{}", i), None))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }

    // Exactly priorMax + 1..=priorMax + N, in serializer completion order
    assert_eq!(ids, (1..=32).collect::<HashSet<u64>>());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_continue_from_prior_max() {
    let (_dir, store) = temp_store().await;
    store.append(draft("existente", None)).await.unwrap();
    store.append(draft("existente", None)).await.unwrap();
    let store = Arc::new(store);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.append(draft("novo", None)).await.unwrap().id
        }));
    }
    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids, (3..=10).collect::<HashSet<u64>>());
}

#[tokio::test(flavor = "multi_thread")]
async fn no_lost_updates_under_concurrent_creates() {
    let (_dir, store) = temp_store().await;
    store.append(draft("inicial", None)).await.unwrap();
    let store = Arc::new(store);

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.append(draft(&format!("p-{}", i), None)).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // initial count + M records, none overwritten
    let products = store.list_all().await.unwrap();
    assert_eq!(products.len(), 17);

    let unique: HashSet<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(unique.len(), 17);
}

#[tokio::test(flavor = "multi_thread")]
async fn reads_race_writes_without_error() {
    let (_dir, store) = temp_store().await;
    let store = Arc::new(store);

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for i in 0..8 {
                store.append(draft(&format!("w-{}", i), None)).await.unwrap();
            }
        })
    };
    let reader = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..8 {
                // May observe pre- or post-write snapshots, never an error
                let products = store.list_all().await.unwrap();
                assert!(products.len() <= 8);
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
}
