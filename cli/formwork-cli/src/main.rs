// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! formwork - render and persist infrastructure templates

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod declaration_file;

#[derive(Parser)]
#[command(
    name = "formwork",
    version,
    about = "Render infrastructure templates and persist them to object storage"
)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a declaration file to its canonical form on stdout
    Render(commands::render::RenderArgs),

    /// Render a declaration file and upload the artifact
    Push(commands::push::PushArgs),

    /// Delete a previously pushed artifact
    Delete(commands::delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                "formwork_cli=debug,formwork_core=debug,formwork_session=debug,formwork_store=debug",
            )
            .init();
    }

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Push(args) => commands::push::run(args).await,
        Commands::Delete(args) => commands::delete::run(args).await,
    }
}
