// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! S3-backed object store

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

use crate::error::StoreError;
use crate::{ObjectStore, PutOutcome, check_destination};

/// Object store backed by the AWS S3 SDK client
///
/// One SDK call per operation. Timeout and retry policy live in the SDK
/// configuration the store was built from.
#[derive(Clone, Debug)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Build a store from a shared SDK configuration
    ///
    /// This is the factory the session adapter uses to derive a default
    /// store from a modern session.
    pub fn from_config(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Wrap an existing S3 client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        content_type: Option<&str>,
    ) -> Result<PutOutcome, StoreError> {
        check_destination(bucket, key)?;
        debug!(bucket, key, bytes = body.len(), "putting object");

        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body.to_vec()))
            .set_content_type(content_type.map(String::from))
            .send()
            .await
            .map_err(|source| StoreError::Put {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: Box::new(source),
            })?;

        Ok(PutOutcome {
            etag: output.e_tag().map(String::from),
            version_id: output.version_id().map(String::from),
        })
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        check_destination(bucket, key)?;
        debug!(bucket, key, "getting object");

        let output = match self.client.get_object().bucket(bucket).key(key).send().await {
            Ok(output) => output,
            Err(err) if err.as_service_error().is_some_and(|e| e.is_no_such_key()) => {
                return Ok(None);
            }
            Err(err) => {
                return Err(StoreError::Get {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    source: Box::new(err),
                });
            }
        };

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|source| StoreError::Get {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: Box::new(source),
            })?
            .into_bytes();
        Ok(Some(bytes.to_vec()))
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StoreError> {
        check_destination(bucket, key)?;
        debug!(bucket, key, "deleting object");

        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|source| StoreError::Delete {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: Box::new(source),
            })?;
        Ok(())
    }
}
