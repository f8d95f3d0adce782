// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! seedling - scaffolding hook pipelines
//!
//! Runs the pre- and post-generation task pipelines of a project template.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seedling::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seedling=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    // Dispatch to command handlers
    match cli.command {
        Commands::PreGen { context } => seedling::cli::pregen::run(context, cli.verbose).await,
        Commands::PostGen { context, dry_run } => {
            seedling::cli::postgen::run(context, dry_run, cli.verbose).await
        }
        Commands::Cleanup { patterns } => seedling::cli::cleanup::run(patterns, cli.verbose).await,
    }
}
