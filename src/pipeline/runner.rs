// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Sequential pipeline runner
//!
//! Executes tasks strictly in order, one child process at a time. The first
//! failure of a required task aborts the run; optional failures are absorbed
//! at the task layer and never reach the runner.

use std::time::{Duration, Instant};

use colored::Colorize;
use tracing::info;

use crate::errors::{SeedlingError, SeedlingResult};
use crate::task::Task;

/// Result of a completed pipeline run
#[derive(Debug)]
pub struct PipelineRun {
    /// Trimmed stdout per task, in execution order
    pub outputs: Vec<(String, String)>,
    /// Total execution time
    pub duration: Duration,
}

impl PipelineRun {
    /// Look up the captured output of a task by name
    pub fn output_of(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, out)| out.as_str())
    }
}

/// An ordered sequence of tasks executed with fail-fast semantics.
///
/// There are exactly two terminal states: completed (every task ran, every
/// required task succeeded) and aborted (a required task failed). There is
/// no partial-success state; re-running after an abort restarts from the
/// first task, and already-completed work is not rolled back.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    tasks: Vec<Task>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tasks: Vec::new(),
        }
    }

    /// Append a task to the end of the sequence
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Append several tasks, preserving their order
    pub fn extend(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.tasks.extend(tasks);
    }

    /// Pipeline name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tasks in execution order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the pipeline has no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Programs required tasks depend on that are not on the PATH.
    ///
    /// Optional tasks are skipped here: a missing tool just means the task
    /// will be skipped at run time.
    pub fn missing_tools(&self) -> Vec<String> {
        let mut missing = Vec::new();

        for task in &self.tasks {
            if !task.is_required() {
                continue;
            }
            let program = task.program();
            if missing.iter().any(|m| m == program) {
                continue;
            }
            if which::which(program).is_err() {
                missing.push(program.to_string());
            }
        }

        missing
    }

    /// Print the execution plan without running anything
    pub fn print_plan(&self) {
        println!();
        println!("{}: {}", "Pipeline".bold(), self.name);
        println!("{}", "═".repeat(50));
        println!(
            "Execution plan ({} task{}):",
            self.tasks.len(),
            if self.tasks.len() == 1 { "" } else { "s" }
        );
        println!();

        for (i, task) in self.tasks.iter().enumerate() {
            print!("  {}. {} ({})", i + 1, task.name().bold(), task.command());
            if !task.is_required() {
                print!(" {}", "[optional]".dimmed());
            }
            println!();
        }

        println!();
    }

    /// Execute all tasks in order.
    ///
    /// Returns the per-task captured outputs on completion, or the aborting
    /// failure wrapped with pipeline context. Tasks after the aborting one
    /// are never executed.
    pub async fn run(&self, verbose: bool) -> SeedlingResult<PipelineRun> {
        let start = Instant::now();

        println!();
        println!("{}: {}", "Pipeline".bold(), self.name);
        println!("{}", "═".repeat(50));

        let mut outputs = Vec::with_capacity(self.tasks.len());

        for task in &self.tasks {
            info!(pipeline = %self.name, task = %task.name(), "running task");

            match task.execute(verbose).await {
                Ok(stdout) => {
                    outputs.push((task.name().to_string(), stdout));
                }
                Err(cause) => {
                    self.print_failure(task, &cause);
                    return Err(SeedlingError::PipelineAborted {
                        pipeline: self.name.clone(),
                        task: task.name().to_string(),
                        cause: Box::new(cause),
                    });
                }
            }
        }

        let duration = start.elapsed();

        println!();
        println!(
            "{}",
            format!(
                "Pipeline completed successfully in {:.2}s",
                duration.as_secs_f64()
            )
            .green()
        );

        Ok(PipelineRun { outputs, duration })
    }

    /// Print the diagnostic block for an aborting failure
    fn print_failure(&self, task: &Task, cause: &SeedlingError) {
        eprintln!();
        eprintln!("{}", format!("Task '{}' failed:", task.name()).red().bold());
        eprintln!("  {} {}", "command:".bold(), task.command());

        if let SeedlingError::CommandFailed { stdout, stderr, exit_code, .. } = cause {
            eprintln!("  {} {}", "exit code:".bold(), exit_code);
            if !stdout.trim().is_empty() {
                eprintln!("  {}", "stdout:".bold());
                eprintln!("{}", stdout.trim_end().dimmed());
            }
            if !stderr.trim().is_empty() {
                eprintln!("  {}", "stderr:".bold());
                eprintln!("{}", stderr.trim_end().dimmed());
            }
        } else {
            eprintln!("  {} {}", "error:".bold(), cause);
        }
    }
}
