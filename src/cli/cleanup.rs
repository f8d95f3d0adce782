// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Cleanup command - strip placeholder comment residue

use colored::Colorize;
use miette::Result;

use crate::cleanup;

/// Run the placeholder filter over the given glob patterns
pub async fn run(patterns: Vec<String>, verbose: bool) -> Result<()> {
    if verbose {
        for pattern in &patterns {
            println!("  {} {}", "→".blue(), pattern);
        }
    }

    let report = cleanup::clean_files(&patterns)?;

    if report.files_changed == 0 {
        println!("  {} No placeholder lines found", "✓".green());
    } else {
        println!(
            "  {} Removed {} placeholder line{} from {} file{}",
            "✓".green(),
            report.lines_removed,
            if report.lines_removed == 1 { "" } else { "s" },
            report.files_changed,
            if report.files_changed == 1 { "" } else { "s" },
        );
    }

    Ok(())
}
