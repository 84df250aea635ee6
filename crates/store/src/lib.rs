// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vitrine-store: File-backed product record store
//!
//! The snapshot file is the only shared mutable resource in the service.
//! Mutations go through the write serializer; reads go straight to disk.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod serializer;
pub mod store;

pub use serializer::WriteSerializer;
pub use store::{RecordStore, StoreError};
