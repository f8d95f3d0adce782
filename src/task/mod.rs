// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Task abstraction
//!
//! A [`Task`] is one named external command with a requiredness flag. The
//! command string is tokenized once, at construction time, into an argv list
//! following shell quoting rules; no shell ever interprets it, so pipes,
//! redirection, and globbing are not available at this layer.

use colored::Colorize;
use tokio::process::Command;
use tracing::{error, warn};

use crate::errors::{SeedlingError, SeedlingResult};

/// A single named, required-or-optional external command invocation.
///
/// Immutable after construction; invoked at most once per pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    command: String,
    argv: Vec<String>,
    required: bool,
}

impl Task {
    /// Create a task from a human-readable command string.
    ///
    /// Quoted substrings containing spaces become single argv tokens:
    /// `echo "hello world"` tokenizes to two tokens, not three.
    pub fn new(name: &str, command: &str, required: bool) -> SeedlingResult<Self> {
        let argv = shell_words::split(command).map_err(|e| SeedlingError::BadCommand {
            command: command.to_string(),
            error: e.to_string(),
        })?;

        if argv.is_empty() {
            return Err(SeedlingError::EmptyCommand {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            command: command.to_string(),
            argv,
            required,
        })
    }

    /// Create a required task (failure aborts the pipeline)
    pub fn required(name: &str, command: &str) -> SeedlingResult<Self> {
        Self::new(name, command, true)
    }

    /// Create an optional task (failure is logged and ignored)
    pub fn optional(name: &str, command: &str) -> SeedlingResult<Self> {
        Self::new(name, command, false)
    }

    /// Display label for this task
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command as originally written
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The tokenized argument vector (program first)
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The program this task invokes
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Whether failure of this task aborts the pipeline
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Execute the task, blocking until the child process exits.
    ///
    /// On exit code zero, returns trimmed stdout. Failures of optional tasks
    /// are downgraded to a warning and an empty string; failures of required
    /// tasks are logged with full diagnostics and propagated.
    pub async fn execute(&self, verbose: bool) -> SeedlingResult<String> {
        match self.spawn_and_capture().await {
            Ok(stdout) => {
                println!("  {} {}", "✓".green(), self.name);
                if verbose {
                    println!("    {}", self.command.dimmed());
                }
                Ok(stdout)
            }
            Err(err) if !self.required => {
                println!("  {} {} {}", "⚠".yellow(), self.name, "(optional, failed)".dimmed());
                warn!(task = %self.name, command = %self.command, error = %err, "optional task failed");
                Ok(String::new())
            }
            Err(err) => {
                println!("  {} {} {}", "✗".red(), self.name, "failed".red());
                if let SeedlingError::CommandFailed { stdout, stderr, .. } = &err {
                    error!(
                        task = %self.name,
                        command = %self.command,
                        stdout = %stdout,
                        stderr = %stderr,
                        "required task failed"
                    );
                } else {
                    error!(task = %self.name, command = %self.command, error = %err, "required task failed");
                }
                Err(err)
            }
        }
    }

    /// Spawn the child with captured output and wait for it to exit
    async fn spawn_and_capture(&self) -> SeedlingResult<String> {
        let output = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .output()
            .await
            .map_err(|e| SeedlingError::LaunchFailed {
                name: self.name.clone(),
                program: self.argv[0].clone(),
                error: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(stdout.trim().to_string())
        } else {
            let exit_code = output.status.code().unwrap_or(-1);
            Err(SeedlingError::command_failed(
                &self.name,
                &self.command,
                exit_code,
                stdout,
                stderr,
            ))
        }
    }
}
