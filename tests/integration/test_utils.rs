//! Shared test utilities for integration tests
//!
//! Every test gets its own temporary root so tests can run in parallel
//! without sharing store state.

use dummy_store::store::{DummyStore, StoreNode};
use tempfile::TempDir;

pub const DEFAULT_STORE_NAME: &str = "www.spec-store.com";

/// A wiped store root in a fresh temp dir and the opened default store.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn fresh_store() -> (TempDir, DummyStore, StoreNode) {
    let temp_dir = TempDir::new().unwrap();
    let store = DummyStore::with_root(temp_dir.path().join("stores")).unwrap();
    store.wipe_out_store(DEFAULT_STORE_NAME).unwrap();
    let root = store.open(DEFAULT_STORE_NAME).unwrap();
    (temp_dir, store, root)
}
