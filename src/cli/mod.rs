// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for seedling.

pub mod cleanup;
pub mod postgen;
pub mod pregen;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scaffolding hook runner
///
/// Runs the pre- and post-generation pipelines of a project template.
#[derive(Parser, Debug)]
#[clap(
    name = "seedling",
    version,
    about = "Pre- and post-generation hook pipelines for project scaffolding",
    long_about = None,
    after_help = "Examples:\n\
        seedling pre-gen                Discover identity and runtimes into the context\n\
        seedling post-gen               Bootstrap the freshly generated project\n\
        seedling post-gen --dry-run     Show the plan without running anything\n\
        seedling cleanup 'src/**/*.py'  Strip leftover placeholder comments\n\n\
        See 'seedling <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run pre-generation discovery and update the context file
    #[clap(name = "pre-gen")]
    PreGen {
        /// Configuration context file
        #[clap(short, long, default_value = "seedling.json")]
        context: PathBuf,
    },

    /// Run the post-generation bootstrap pipeline
    #[clap(name = "post-gen")]
    PostGen {
        /// Configuration context file
        #[clap(short, long, default_value = "seedling.json")]
        context: PathBuf,

        /// Show the execution plan without running anything
        #[clap(long)]
        dry_run: bool,
    },

    /// Strip placeholder comment lines left by conditional template blocks
    Cleanup {
        /// Glob patterns selecting files to filter
        #[clap(default_value = crate::cleanup::DEFAULT_PATTERN)]
        patterns: Vec<String>,
    },
}
