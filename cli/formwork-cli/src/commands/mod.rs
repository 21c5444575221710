// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Subcommand implementations

pub mod delete;
pub mod push;
pub mod render;

use aws_config::{BehaviorVersion, Region};
use formwork_session::Session;
use tracing::debug;

/// Build a modern session from the environment, with optional overrides
///
/// Region and endpoint overrides exist for S3-compatible stores and test
/// rigs; everything else comes from the default credential chain.
pub(crate) async fn build_session(region: Option<String>, endpoint_url: Option<String>) -> Session {
    if region.is_none() && endpoint_url.is_none() {
        return Session::from_env().await;
    }

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        debug!(%region, "overriding region");
        loader = loader.region(Region::new(region));
    }
    if let Some(endpoint_url) = endpoint_url {
        debug!(%endpoint_url, "overriding endpoint");
        loader = loader.endpoint_url(endpoint_url);
    }
    Session::modern(loader.load().await)
}
