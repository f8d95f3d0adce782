// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Post-gen command - bootstrap the generated project

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::context::Context;
use crate::hooks;

/// Run the post-generation pipeline
pub async fn run(context_path: PathBuf, dry_run: bool, verbose: bool) -> Result<()> {
    let ctx = Context::load(&context_path)?;
    let pipeline = hooks::postgen::build(&ctx)?;

    if dry_run {
        pipeline.print_plan();
        return Ok(());
    }

    // Check required tools are available before running anything
    let missing = pipeline.missing_tools();
    if !missing.is_empty() {
        eprintln!("{}", "Missing required tools:".red().bold());
        for tool in &missing {
            eprintln!("  {} {}", "✗".red(), tool);
            match tool.as_str() {
                "uv" => eprintln!("    Install: {}", "https://docs.astral.sh/uv/".cyan()),
                "gh" => eprintln!("    Install: {}", "https://cli.github.com/".cyan()),
                "git" => eprintln!("    Install: {}", "https://git-scm.com/downloads".cyan()),
                _ => {}
            }
        }
        return Err(miette::miette!("Required tools are not installed"));
    }

    pipeline.run(verbose).await?;

    Ok(())
}
