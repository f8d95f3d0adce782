// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Pre-gen command - discovery into the configuration context

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::context::Context;
use crate::hooks;

/// Run pre-generation discovery and rewrite the context file
pub async fn run(context_path: PathBuf, verbose: bool) -> Result<()> {
    let mut ctx = Context::load(&context_path)?;

    println!("{}", "Discovering ambient configuration...".bold());
    println!();

    hooks::pregen::run(&mut ctx).await?;

    println!();
    println!(
        "  {} Updated {}",
        "✓".green(),
        context_path.display().to_string().cyan()
    );

    if verbose {
        println!();
        println!("{}", "Merged values:".dimmed());
        for key in ["github_username", "email"] {
            if let Some(value) = ctx.get_str(key) {
                println!("  {} = {}", key, value.dimmed());
            }
        }
    }

    Ok(())
}
