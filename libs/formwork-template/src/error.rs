// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for formwork-template

use thiserror::Error;

/// Errors raised while building or rendering a template document
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Logical IDs must be non-empty and ASCII alphanumeric
    #[error("invalid logical ID {0:?}: IDs must be non-empty ASCII alphanumerics")]
    InvalidLogicalId(String),

    /// A declaration with this logical ID already exists in the section
    #[error("duplicate logical ID {0:?}")]
    DuplicateLogicalId(String),

    /// A supplied value has no structural representation
    #[error("value {name:?} cannot be serialized")]
    Value {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be rendered to its canonical text form
    #[error("template cannot be rendered")]
    Render(#[from] serde_json::Error),

    /// Rendered bytes were not valid UTF-8
    #[error("rendered template is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
