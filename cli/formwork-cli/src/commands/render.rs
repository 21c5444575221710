// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! `formwork render` - canonical render of a declaration file

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use formwork_template::TemplateDocument;

use crate::declaration_file;

#[derive(Args)]
pub struct RenderArgs {
    /// Declaration file to render
    pub file: PathBuf,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let mut document = TemplateDocument::new();
    declaration_file::apply_to(&mut document, &args.file)?;
    println!("{}", document.render()?);
    Ok(())
}
