// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Session-to-template binding and artifact persistence
//!
//! [`Formwork`] binds a validated cloud session to a template document and,
//! optionally, an object store. Construction checks the session's
//! capability tier and allocates one empty [`TemplateDocument`]; the caller
//! accumulates declarations into it through [`Formwork::template_mut`] and
//! then calls [`Formwork::persist`] to render the document and upload the
//! canonical bytes.
//!
//! Persistence is a two-step stateless pipeline, render then write, run
//! synchronously per call. Overwrite semantics: persisting an unchanged
//! document to the same destination stores byte-identical content.
//!
//! # Example
//!
//! ```no_run
//! use formwork_core::Formwork;
//! use formwork_session::Session;
//! use formwork_template::Resource;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::from_env().await;
//! let mut formwork = Formwork::with_default_store(session)?;
//! formwork
//!     .template_mut()
//!     .add_resource("Queue", Resource::new("AWS::SQS::Queue"))?;
//! formwork.persist("infra-templates", "stack1.json").await?;
//! # Ok(())
//! # }
//! ```

pub mod error;

use std::sync::Arc;

use formwork_session::{Session, SessionKind};
use formwork_store::{ObjectStore, PutOutcome, S3Store};
use formwork_template::TemplateDocument;
use tracing::debug;

pub use error::{ConfigError, PersistError};

/// Content type attached to persisted template artifacts
pub const ARTIFACT_CONTENT_TYPE: &str = "application/json";

/// A validated session bound to a template document and, optionally, a store
pub struct Formwork {
    session: Session,
    template: TemplateDocument,
    store: Option<Arc<dyn ObjectStore>>,
}

impl std::fmt::Debug for Formwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formwork")
            .field("session", &self.session)
            .field("template", &self.template)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

impl Formwork {
    /// Bind a session without persistence capability
    ///
    /// Fails with [`ConfigError::IncompatibleSession`] unless the session is
    /// modern. `persist` and `retract` on the result fail with
    /// [`ConfigError::NoStore`].
    pub fn new(session: Session) -> Result<Self, ConfigError> {
        Self::bind(session, None)
    }

    /// Bind a session with an explicitly injected store
    pub fn with_store(session: Session, store: Arc<dyn ObjectStore>) -> Result<Self, ConfigError> {
        Self::bind(session, Some(store))
    }

    /// Bind a session and derive the default S3-backed store from it
    ///
    /// The derivation is [`S3Store::from_config`] on the session's SDK
    /// configuration; inject a different store through [`Formwork::with_store`].
    pub fn with_default_store(session: Session) -> Result<Self, ConfigError> {
        let store = match session.sdk_config() {
            Some(config) => Arc::new(S3Store::from_config(config)) as Arc<dyn ObjectStore>,
            None => return Err(ConfigError::IncompatibleSession(session.kind())),
        };
        Self::bind(session, Some(store))
    }

    fn bind(session: Session, store: Option<Arc<dyn ObjectStore>>) -> Result<Self, ConfigError> {
        if session.kind() != SessionKind::Modern {
            return Err(ConfigError::IncompatibleSession(session.kind()));
        }
        Ok(Self {
            session,
            template: TemplateDocument::new(),
            store,
        })
    }

    /// The validated session this binding was constructed with
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The owned template document
    ///
    /// Created once at construction and never replaced; callers accumulate
    /// declarations into it for the lifetime of the binding.
    pub fn template(&self) -> &TemplateDocument {
        &self.template
    }

    pub fn template_mut(&mut self) -> &mut TemplateDocument {
        &mut self.template
    }

    /// Whether this binding can persist
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Render the document and write the canonical bytes to `bucket`/`key`
    ///
    /// Blocks until the remote write completes or fails. The write replaces
    /// any existing object; result metadata is passed through from the
    /// storage layer unmodified. Failures propagate without retry, and a
    /// failed write leaves the in-memory document untouched.
    pub async fn persist(&self, bucket: &str, key: &str) -> Result<PutOutcome, PersistError> {
        let store = self.store.as_ref().ok_or(ConfigError::NoStore)?;
        let body = self.template.render()?;
        debug!(bucket, key, bytes = body.len(), "persisting rendered template");
        let outcome = store
            .put_object(bucket, key, body.as_bytes(), Some(ARTIFACT_CONTENT_TYPE))
            .await?;
        Ok(outcome)
    }

    /// Delete a previously persisted artifact at `bucket`/`key`
    pub async fn retract(&self, bucket: &str, key: &str) -> Result<(), PersistError> {
        let store = self.store.as_ref().ok_or(ConfigError::NoStore)?;
        debug!(bucket, key, "retracting persisted template");
        store.delete_object(bucket, key).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aws_config::SdkConfig;
    use formwork_session::LegacyCredentials;
    use formwork_store::MemoryStore;

    use super::*;

    fn modern_session() -> Session {
        Session::modern(SdkConfig::builder().build())
    }

    #[test]
    fn test_legacy_session_rejected() {
        let session = Session::legacy(LegacyCredentials::new("AKIDEXAMPLE", "shh", "us-east-1"));
        let err = Formwork::new(session).expect_err("legacy sessions must be rejected");
        assert!(matches!(err, ConfigError::IncompatibleSession(SessionKind::Legacy)));
        assert!(err.to_string().contains("legacy"));
    }

    #[test]
    fn test_legacy_session_rejected_before_store_derivation() {
        let session = Session::legacy(LegacyCredentials::new("AKIDEXAMPLE", "shh", "us-east-1"));
        let err = Formwork::with_default_store(session)
            .expect_err("legacy sessions must be rejected");
        assert!(matches!(err, ConfigError::IncompatibleSession(SessionKind::Legacy)));
    }

    #[test]
    fn test_modern_session_yields_empty_template() {
        let formwork = Formwork::new(modern_session()).expect("modern sessions bind");
        assert!(formwork.template().is_empty());
        assert!(!formwork.has_store());
        assert_eq!(formwork.session().kind(), SessionKind::Modern);
    }

    #[test]
    fn test_default_store_derived_from_modern_session() {
        let formwork =
            Formwork::with_default_store(modern_session()).expect("modern sessions bind");
        assert!(formwork.has_store());
    }

    #[tokio::test]
    async fn test_persist_without_store_is_a_config_error() {
        let formwork = Formwork::new(modern_session()).expect("modern sessions bind");
        let err = formwork
            .persist("infra-templates", "stack1.json")
            .await
            .expect_err("persist without a store must fail");
        assert!(matches!(err, PersistError::Config(ConfigError::NoStore)));

        let err = formwork
            .retract("infra-templates", "stack1.json")
            .await
            .expect_err("retract without a store must fail");
        assert!(matches!(err, PersistError::Config(ConfigError::NoStore)));
    }

    #[tokio::test]
    async fn test_retract_removes_persisted_artifact() {
        let store = Arc::new(MemoryStore::new());
        let formwork = Formwork::with_store(modern_session(), store.clone())
            .expect("modern sessions bind");

        formwork
            .persist("infra-templates", "stack1.json")
            .await
            .expect("persist succeeds");
        assert!(store.contains("infra-templates", "stack1.json"));

        formwork
            .retract("infra-templates", "stack1.json")
            .await
            .expect("retract succeeds");
        assert!(!store.contains("infra-templates", "stack1.json"));
    }
}
