// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Error types for hook pipelines
//!
//! seedling distinguishes failures to *launch* an external command from
//! commands that launched but exited non-zero, because the two are reported
//! differently and only the latter carries captured output.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for seedling operations
pub type SeedlingResult<T> = Result<T, SeedlingError>;

/// Main error type for seedling
#[derive(Error, Debug, Diagnostic)]
pub enum SeedlingError {
    // ─────────────────────────────────────────────────────────────────────────
    // Task Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Task '{name}' could not be launched: {error}")]
    #[diagnostic(
        code(seedling::launch_failed),
        help("Check that '{program}' is installed and on your PATH")
    )]
    LaunchFailed {
        name: String,
        program: String,
        error: String,
    },

    #[error("Task '{name}' failed with exit code {exit_code}")]
    #[diagnostic(code(seedling::command_failed))]
    CommandFailed {
        name: String,
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
        #[help]
        help: Option<String>,
    },

    #[error("Task '{name}' has an empty command")]
    #[diagnostic(
        code(seedling::empty_command),
        help("Every task needs at least a program name to invoke")
    )]
    EmptyCommand { name: String },

    #[error("Failed to tokenize command '{command}': {error}")]
    #[diagnostic(
        code(seedling::bad_command),
        help("Command strings follow shell quoting rules; check for unbalanced quotes")
    )]
    BadCommand { command: String, error: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Pipeline Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Pipeline '{pipeline}' aborted at task '{task}'")]
    #[diagnostic(
        code(seedling::pipeline_aborted),
        help("Fix the failing command and re-run; completed tasks are not rolled back")
    )]
    PipelineAborted {
        pipeline: String,
        task: String,
        #[source]
        cause: Box<SeedlingError>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Context Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Context file not found: {path}")]
    #[diagnostic(
        code(seedling::context_not_found),
        help("The configuration context is written by the template engine before hooks run")
    )]
    ContextNotFound { path: PathBuf },

    #[error("Failed to read context '{path}': {error}")]
    #[diagnostic(code(seedling::context_read_error))]
    ContextReadError { path: PathBuf, error: String },

    #[error("Failed to write context '{path}': {error}")]
    #[diagnostic(code(seedling::context_write_error))]
    ContextWriteError { path: PathBuf, error: String },

    #[error("Context is not a JSON object: {path}")]
    #[diagnostic(
        code(seedling::context_not_object),
        help("The top level of the context file must be a JSON object")
    )]
    ContextNotObject { path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────────
    // Cleanup Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(seedling::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(seedling::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(seedling::io_error))]
    Io { message: String },

    #[error("JSON parsing error: {message}")]
    #[diagnostic(code(seedling::json_error))]
    Json { message: String },

    #[error("Glob pattern error: {message}")]
    #[diagnostic(code(seedling::glob_error))]
    GlobPattern { message: String },
}

impl From<std::io::Error> for SeedlingError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl From<serde_json::Error> for SeedlingError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<glob::PatternError> for SeedlingError {
    fn from(e: glob::PatternError) -> Self {
        Self::GlobPattern { message: e.to_string() }
    }
}

impl SeedlingError {
    /// Create a command failure with a hint derived from the tool's output
    pub fn command_failed(
        name: &str,
        command: &str,
        exit_code: i32,
        stdout: String,
        stderr: String,
    ) -> Self {
        let help = Self::generate_help_for_tool(command, &stderr);
        Self::CommandFailed {
            name: name.to_string(),
            command: command.to_string(),
            exit_code,
            stdout,
            stderr,
            help,
        }
    }

    /// Generate helpful suggestions based on the failing tool's output
    fn generate_help_for_tool(command: &str, stderr: &str) -> Option<String> {
        let program = command.split_whitespace().next().unwrap_or("");
        match program {
            "git" => Self::parse_git_error(stderr),
            "uv" => Self::parse_uv_error(stderr),
            "gh" => Self::parse_gh_error(stderr),
            _ => None,
        }
    }

    fn parse_git_error(stderr: &str) -> Option<String> {
        // Common git error patterns during project bootstrap
        if stderr.contains("not a git repository") {
            Some("The repository was never initialized; check earlier pipeline output.".into())
        } else if stderr.contains("user.name") || stderr.contains("user.email") {
            Some("Set your identity with 'git config --global user.name/user.email'.".into())
        } else {
            None
        }
    }

    fn parse_uv_error(stderr: &str) -> Option<String> {
        if stderr.contains("pyproject.toml") {
            Some("uv expects a pyproject.toml in the generated project root.".into())
        } else if stderr.contains("already exists") {
            Some("A virtual environment already exists; remove .venv to recreate it.".into())
        } else {
            None
        }
    }

    fn parse_gh_error(stderr: &str) -> Option<String> {
        if stderr.contains("auth") {
            Some("Authenticate with 'gh auth login' before creating remote repositories.".into())
        } else if stderr.contains("already exists") {
            Some("A repository with this name already exists on the remote host.".into())
        } else {
            None
        }
    }
}
