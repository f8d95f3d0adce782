// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Generation hooks
//!
//! The two pipelines a scaffolding run invokes: discovery before the
//! template engine renders anything, and project bootstrap afterwards.

pub mod postgen;
pub mod pregen;
