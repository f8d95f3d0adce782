// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Pipeline definitions and execution
//!
//! A pipeline is a transient ordered list of tasks, assembled once per
//! generation run and consumed top-to-bottom with fail-fast semantics.

mod runner;

pub use runner::{Pipeline, PipelineRun};
