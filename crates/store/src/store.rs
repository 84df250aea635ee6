// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed product record store
//!
//! The whole snapshot is rewritten on every create: the format is a single
//! JSON array with no native append, so replace-on-write keeps it
//! well-formed at rest. Last fully-written snapshot wins.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;
use vitrine_core::{DraftProduct, Product};

use crate::serializer::WriteSerializer;

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product payload must not be empty")]
    InvalidInput,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt snapshot: {0}")]
    Corruption(#[from] serde_json::Error),
}

/// Durable container of product records
pub struct RecordStore {
    path: PathBuf,
    serializer: WriteSerializer,
}

impl RecordStore {
    /// Open a store at the given path, seeding an empty snapshot if the
    /// file does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        match fs::metadata(&path).await {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                write_snapshot(&path, &[]).await?;
                debug!("seeded empty snapshot at {}", path.display());
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self {
            path,
            serializer: WriteSerializer::new(),
        })
    }

    /// Path to the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current snapshot.
    ///
    /// Does not take the write lock: a read racing an in-flight append may
    /// observe either the pre- or post-write snapshot.
    pub async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        read_snapshot(&self.path).await
    }

    /// Append a product, assigning the next identifier.
    ///
    /// The read-assign-write cycle runs under the write serializer so
    /// concurrent appends cannot lose updates or share an identifier.
    /// If the rewrite fails the previous snapshot remains intact.
    pub async fn append(&self, draft: DraftProduct) -> Result<Product, StoreError> {
        if draft.is_empty() {
            return Err(StoreError::InvalidInput);
        }

        self.serializer
            .run_exclusive(async {
                let mut products = read_snapshot(&self.path).await?;
                let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
                let product = Product::from_draft(next_id, draft);
                products.push(product.clone());
                write_snapshot(&self.path, &products).await?;
                debug!(id = product.id, total = products.len(), "product appended");
                Ok(product)
            })
            .await
    }
}

async fn read_snapshot(path: &Path) -> Result<Vec<Product>, StoreError> {
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Replace the snapshot via a temp file and rename, so a failed write
/// never leaves a partially-written array behind
async fn write_snapshot(path: &Path, products: &[Product]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(products)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
