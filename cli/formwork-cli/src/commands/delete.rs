// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! `formwork delete` - remove a previously pushed artifact

use anyhow::Result;
use clap::Args;
use formwork_core::Formwork;

use crate::commands::build_session;

#[derive(Args)]
pub struct DeleteArgs {
    /// Bucket holding the artifact
    #[arg(short, long, env = "FORMWORK_BUCKET")]
    pub bucket: String,

    /// Key of the artifact to delete
    #[arg(short, long)]
    pub key: String,

    /// Region override
    #[arg(long, env = "FORMWORK_REGION")]
    pub region: Option<String>,

    /// Endpoint override, for S3-compatible stores
    #[arg(long, env = "FORMWORK_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let session = build_session(args.region, args.endpoint_url).await;
    let formwork = Formwork::with_default_store(session)?;
    formwork.retract(&args.bucket, &args.key).await?;

    println!("deleted {}/{}", args.bucket, args.key);
    Ok(())
}
