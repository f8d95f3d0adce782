// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Placeholder-comment cleanup
//!
//! Conditional template blocks that render to nothing leave behind
//! degenerate comment lines (a lone `#`, possibly padded with whitespace).
//! This is an isolated post-processing filter over generated text files,
//! decoupled from the task and pipeline layers.

use std::path::Path;

use regex::Regex;
use tracing::warn;

use crate::errors::{SeedlingError, SeedlingResult};

/// Default pattern covering the generated source tree
pub const DEFAULT_PATTERN: &str = "**/*.py";

/// Summary of a cleanup pass
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Files rewritten
    pub files_changed: usize,
    /// Placeholder lines removed across all files
    pub lines_removed: usize,
}

/// Strip degenerate placeholder comment lines from a text.
///
/// A placeholder line is a comment marker alone on its line, optionally
/// surrounded by whitespace. Returns the filtered text and how many lines
/// were dropped.
pub fn strip_placeholder_lines(text: &str) -> (String, usize) {
    let placeholder = Regex::new(r"^\s*#\s*$").expect("valid placeholder pattern");

    let mut kept = Vec::new();
    let mut removed = 0;

    for line in text.lines() {
        if placeholder.is_match(line) {
            removed += 1;
        } else {
            kept.push(line);
        }
    }

    let mut filtered = kept.join("\n");
    if text.ends_with('\n') && !filtered.is_empty() {
        filtered.push('\n');
    }

    (filtered, removed)
}

/// Run the filter over every file matching the given glob patterns.
///
/// Only files whose content actually changes are rewritten. Unreadable
/// files (e.g. binaries accidentally matched by a broad pattern) are
/// skipped with a warning rather than aborting the pass.
pub fn clean_files(patterns: &[String]) -> SeedlingResult<CleanupReport> {
    let mut report = CleanupReport::default();

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let Ok(path) = entry else { continue };
            if !path.is_file() {
                continue;
            }
            clean_one(&path, &mut report)?;
        }
    }

    Ok(report)
}

fn clean_one(path: &Path, report: &mut CleanupReport) -> SeedlingResult<()> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable file");
            return Ok(());
        }
    };

    let (filtered, removed) = strip_placeholder_lines(&content);
    if removed == 0 {
        return Ok(());
    }

    std::fs::write(path, filtered).map_err(|e| SeedlingError::FileWriteError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    report.files_changed += 1;
    report.lines_removed += removed;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_lone_comment_markers() {
        let text = "import os\n#\nprint('hi')\n  #  \n";
        let (filtered, removed) = strip_placeholder_lines(text);
        assert_eq!(filtered, "import os\nprint('hi')\n");
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_keeps_real_comments() {
        let text = "# real comment\nx = 1  # trailing\n";
        let (filtered, removed) = strip_placeholder_lines(text);
        assert_eq!(filtered, text);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_untouched_text_round_trips() {
        let text = "def main():\n    pass\n";
        let (filtered, removed) = strip_placeholder_lines(text);
        assert_eq!(filtered, text);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_clean_files_rewrites_only_changed() {
        let dir = tempfile::tempdir().unwrap();
        let dirty = dir.path().join("dirty.py");
        let clean = dir.path().join("clean.py");
        std::fs::write(&dirty, "#\nx = 1\n").unwrap();
        std::fs::write(&clean, "y = 2\n").unwrap();

        let pattern = format!("{}/*.py", dir.path().display());
        let report = clean_files(&[pattern]).unwrap();

        assert_eq!(report.files_changed, 1);
        assert_eq!(report.lines_removed, 1);
        assert_eq!(std::fs::read_to_string(&dirty).unwrap(), "x = 1\n");
        assert_eq!(std::fs::read_to_string(&clean).unwrap(), "y = 2\n");
    }
}
