// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! `formwork push` - render a declaration file and upload the artifact

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::Args;
use formwork_core::Formwork;

use crate::commands::build_session;
use crate::declaration_file;

#[derive(Args)]
pub struct PushArgs {
    /// Declaration file to render and upload
    pub file: PathBuf,

    /// Destination bucket
    #[arg(short, long, env = "FORMWORK_BUCKET")]
    pub bucket: String,

    /// Destination key (defaults to the file stem with a .json suffix)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Region override
    #[arg(long, env = "FORMWORK_REGION")]
    pub region: Option<String>,

    /// Endpoint override, for S3-compatible stores
    #[arg(long, env = "FORMWORK_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,
}

pub async fn run(args: PushArgs) -> Result<()> {
    let key = match &args.key {
        Some(key) => key.clone(),
        None => default_key(&args.file)?,
    };

    let session = build_session(args.region, args.endpoint_url).await;
    let mut formwork = Formwork::with_default_store(session)?;
    declaration_file::apply_to(formwork.template_mut(), &args.file)?;

    let outcome = formwork.persist(&args.bucket, &key).await?;

    println!("pushed {} to {}/{}", args.file.display(), args.bucket, key);
    if let Some(version_id) = outcome.version_id {
        println!("version: {version_id}");
    }
    Ok(())
}

fn default_key(file: &Path) -> Result<String> {
    let stem = file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow!("cannot derive a key from {}", file.display()))?;
    Ok(format!("{stem}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_uses_file_stem() {
        assert_eq!(
            default_key(Path::new("deploy/stack1.template")).expect("stem exists"),
            "stack1.json"
        );
        assert_eq!(
            default_key(Path::new("stack1")).expect("stem exists"),
            "stack1.json"
        );
    }
}
