// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for formwork-store

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by object store operations
///
/// Remote failures carry the underlying client error as `source` and are
/// never retried here; the caller decides whether to retry.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Bucket and key must both be non-empty
    #[error("object destination must name a bucket and a key")]
    InvalidDestination,

    /// The remote write failed
    #[error("put {bucket}/{key} failed")]
    Put {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    /// The remote read failed
    #[error("get {bucket}/{key} failed")]
    Get {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    /// The remote delete failed
    #[error("delete {bucket}/{key} failed")]
    Delete {
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },
}
