// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! # seedling - scaffolding hook pipelines
//!
//! `seedling` runs the pre- and post-generation hook pipelines of a
//! project-scaffolding template: a short sequential list of external
//! commands, each marked required or optional, stopping on the first
//! required failure while tolerating optional failures.
//!
//! ## Quick Start
//!
//! ```bash
//! # Before rendering: merge git identity and runtimes into the context
//! seedling pre-gen
//!
//! # After rendering, inside the new project: bootstrap it
//! seedling post-gen
//!
//! # Strip comment residue left by conditional template blocks
//! seedling cleanup 'src/**/*.py'
//! ```

pub mod cleanup;
pub mod cli;
pub mod context;
pub mod errors;
pub mod hooks;
pub mod pipeline;
pub mod task;

// Re-export commonly used types
pub use context::Context;
pub use errors::{SeedlingError, SeedlingResult};
pub use pipeline::{Pipeline, PipelineRun};
pub use task::Task;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
