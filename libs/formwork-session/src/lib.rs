// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Capability-tiered cloud session handles
//!
//! A [`Session`] represents authenticated access to the cloud provider and
//! carries an explicit capability tier. Modern sessions wrap the provider
//! SDK's shared configuration and can drive every current client surface.
//! Legacy sessions carry first-generation static credentials as handed out
//! by the retired in-house signing path; consumers that need the current
//! SDK surface must reject them at their boundary.
//!
//! Credential discovery, region selection and timeout policy all belong to
//! the provider config crate; nothing here second-guesses them.

use aws_config::{BehaviorVersion, SdkConfig};
use secrecy::SecretString;
use tracing::debug;

/// The capability tier of a session handle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    /// First-generation static credentials for the retired signing path
    Legacy,
    /// Shared SDK configuration for the current client surface
    Modern,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Legacy => f.write_str("legacy"),
            SessionKind::Modern => f.write_str("modern"),
        }
    }
}

/// Static credentials as issued to first-generation tooling
///
/// The secret half never appears in `Debug` output.
#[derive(Clone, Debug)]
pub struct LegacyCredentials {
    pub access_key: String,
    pub secret_key: SecretString,
    pub region: String,
}

impl LegacyCredentials {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
            region: region.into(),
        }
    }
}

/// An authenticated session handle, tagged by capability tier
#[derive(Clone, Debug)]
pub enum Session {
    Legacy(LegacyCredentials),
    Modern(Box<SdkConfig>),
}

impl Session {
    /// Load a modern session from the ambient environment
    ///
    /// Runs the provider's default credential chain and region discovery.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        debug!(region = ?config.region(), "loaded provider configuration from environment");
        Session::Modern(Box::new(config))
    }

    /// Wrap an already-built SDK configuration
    pub fn modern(config: SdkConfig) -> Self {
        Session::Modern(Box::new(config))
    }

    /// Wrap first-generation static credentials
    pub fn legacy(credentials: LegacyCredentials) -> Self {
        Session::Legacy(credentials)
    }

    /// The capability tier of this handle
    pub fn kind(&self) -> SessionKind {
        match self {
            Session::Legacy(_) => SessionKind::Legacy,
            Session::Modern(_) => SessionKind::Modern,
        }
    }

    /// The SDK configuration, if this is a modern session
    pub fn sdk_config(&self) -> Option<&SdkConfig> {
        match self {
            Session::Modern(config) => Some(config),
            Session::Legacy(_) => None,
        }
    }
}
