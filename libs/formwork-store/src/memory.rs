// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory object store for tests

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::{ObjectStore, PutOutcome, check_destination};

/// In-memory keyed byte map with the same contract as the real backends
///
/// Puts overwrite, and the synthetic etag is a pure function of the stored
/// bytes, so idempotence checks can compare outcomes across calls.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects across all buckets
    pub fn len(&self) -> usize {
        self.objects().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects().is_empty()
    }

    pub fn contains(&self, bucket: &str, key: &str) -> bool {
        self.objects()
            .contains_key(&(bucket.to_string(), key.to_string()))
    }

    /// Stored bytes for an object, if present
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    fn objects(&self) -> MutexGuard<'_, HashMap<(String, String), Vec<u8>>> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn synthetic_etag(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("\"{:016x}\"", hasher.finish())
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        _content_type: Option<&str>,
    ) -> Result<PutOutcome, StoreError> {
        check_destination(bucket, key)?;
        self.objects()
            .insert((bucket.to_string(), key.to_string()), body.to_vec());
        Ok(PutOutcome {
            etag: Some(synthetic_etag(body)),
            version_id: None,
        })
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        check_destination(bucket, key)?;
        Ok(self.object(bucket, key))
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StoreError> {
        check_destination(bucket, key)?;
        self.objects()
            .remove(&(bucket.to_string(), key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_delete_round_trip() {
        let store = MemoryStore::new();

        let outcome = store
            .put_object("infra-templates", "stack1.json", b"{}", Some("application/json"))
            .await
            .expect("put succeeds");
        assert!(outcome.etag.is_some());

        let body = store
            .get_object("infra-templates", "stack1.json")
            .await
            .expect("get succeeds");
        assert_eq!(body.as_deref(), Some(b"{}".as_slice()));

        store
            .delete_object("infra-templates", "stack1.json")
            .await
            .expect("delete succeeds");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_put_overwrites_in_place() {
        let store = MemoryStore::new();
        store
            .put_object("b", "k", b"first", None)
            .await
            .expect("put succeeds");
        store
            .put_object("b", "k", b"second", None)
            .await
            .expect("put succeeds");

        assert_eq!(store.len(), 1);
        assert_eq!(store.object("b", "k").as_deref(), Some(b"second".as_slice()));
    }

    #[tokio::test]
    async fn test_etag_is_a_function_of_the_bytes() {
        let store = MemoryStore::new();
        let first = store
            .put_object("b", "k", b"same", None)
            .await
            .expect("put succeeds");
        let second = store
            .put_object("b", "k", b"same", None)
            .await
            .expect("put succeeds");
        let changed = store
            .put_object("b", "k", b"different", None)
            .await
            .expect("put succeeds");

        assert_eq!(first, second);
        assert_ne!(first, changed);
    }

    #[tokio::test]
    async fn test_missing_object_reads_as_none() {
        let store = MemoryStore::new();
        let body = store
            .get_object("b", "nope")
            .await
            .expect("get of a missing key is not an error");
        assert!(body.is_none());

        // Deleting an absent key is not an error either.
        store.delete_object("b", "nope").await.expect("delete succeeds");
    }

    #[tokio::test]
    async fn test_empty_destination_rejected() {
        let store = MemoryStore::new();
        let err = store
            .put_object("", "k", b"x", None)
            .await
            .expect_err("empty bucket must be rejected");
        assert!(matches!(err, StoreError::InvalidDestination));

        let err = store
            .put_object("b", "", b"x", None)
            .await
            .expect_err("empty key must be rejected");
        assert!(matches!(err, StoreError::InvalidDestination));
    }
}
