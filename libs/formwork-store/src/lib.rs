// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Object storage interface for persisted artifacts
//!
//! [`ObjectStore`] is the narrow surface the rest of the workspace writes
//! through: put, get and delete of named byte blobs. Two implementations
//! ship here:
//!
//! - [`S3Store`] - backed by the AWS S3 SDK client
//! - [`MemoryStore`] - an in-memory keyed byte map for tests
//!
//! Operations are single calls with overwrite semantics. There is no retry
//! or backoff layer here; whatever the underlying client is configured to do
//! is all that happens.

pub mod error;
pub mod memory;
pub mod s3;

use async_trait::async_trait;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use s3::S3Store;

/// Result metadata from a completed put, passed through from the backend
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PutOutcome {
    pub etag: Option<String>,
    pub version_id: Option<String>,
}

/// Write-side capability for named byte blobs in remote storage
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` as the full content of the object at `bucket`/`key`,
    /// creating or replacing it
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        content_type: Option<&str>,
    ) -> Result<PutOutcome, StoreError>;

    /// Read the full content of the object, or `None` if the key is absent
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Delete the object; deleting an absent key is not an error
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StoreError>;
}

/// Reject destinations with an empty bucket or key
///
/// Reachability and permissions are not checked anywhere locally; those
/// failures surface from the backend.
pub(crate) fn check_destination(bucket: &str, key: &str) -> Result<(), StoreError> {
    if bucket.is_empty() || key.is_empty() {
        return Err(StoreError::InvalidDestination);
    }
    Ok(())
}
