// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Category projection
//!
//! Categories are a derived view over the product snapshot, never a second
//! source of truth. They are recomputed on every request.

use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A derived category descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Sequential identifier, numbered from 1 in first-seen order
    pub id: u64,
    /// Category name as it appears on the products
    pub nome: String,
}

/// Derive the distinct categories from a product snapshot.
///
/// Categories appear in first-seen store order and are numbered from 1.
/// Products without a category (or with an empty one) contribute nothing.
/// Deterministic: the same snapshot always yields the same output.
pub fn derive_categories(products: &[Product]) -> Vec<Category> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();

    for product in products {
        let Some(nome) = product.categoria() else {
            continue;
        };
        if seen.insert(nome.to_string()) {
            categories.push(Category {
                id: categories.len() as u64 + 1,
                nome: nome.to_string(),
            });
        }
    }

    categories
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
