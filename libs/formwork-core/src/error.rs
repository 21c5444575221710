// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for formwork-core

use formwork_session::SessionKind;
use formwork_store::StoreError;
use formwork_template::TemplateError;
use thiserror::Error;

/// Construction-time misconfiguration of a template binding
///
/// Fatal to the binding instance; the caller must reconstruct with a valid
/// session or an attached store.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The supplied session is of the wrong capability tier
    #[error("incompatible session kind {0}: the template binding requires a modern session")]
    IncompatibleSession(SessionKind),

    /// The binding was constructed without persistence capability
    #[error("no object store attached: construct with with_store or with_default_store")]
    NoStore,
}

/// Errors surfaced by persist and retract
///
/// Fatal to that call only; nothing is retried and nothing is swallowed.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The document could not be rendered to its canonical form
    #[error(transparent)]
    Render(#[from] TemplateError),

    /// The remote operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
