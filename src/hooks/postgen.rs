// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Post-generation pipeline
//!
//! Assembles the bootstrap sequence that runs inside a freshly rendered
//! project directory: runtime setup, environment creation, dependency sync,
//! version-control initialization, and (optionally) remote-repository
//! creation. Assembly is pure given the same context; the remote branch is
//! evaluated exactly once, before any task runs.

use crate::context::Context;
use crate::errors::SeedlingResult;
use crate::pipeline::Pipeline;
use crate::task::Task;

/// Context flag that toggles remote-repository creation
pub const CREATE_REMOTE_KEY: &str = "create_remote";

/// Fallback owner when identity discovery never ran
const DEFAULT_OWNER: &str = "unknown_user";

/// Build the post-generation pipeline from the configuration context.
pub fn build(ctx: &Context) -> SeedlingResult<Pipeline> {
    let mut pipeline = Pipeline::new("post-generation");

    pipeline.extend([
        Task::required("Install Python", "uv python install")?,
        Task::required("Create virtualenv", "uv --verbose venv")?,
        Task::optional("Enable direnv", "direnv allow")?,
        Task::required("Sync dependencies", "uv --quiet --no-progress sync")?,
        Task::optional("Tidy generated sources", "ruff check --fix-only --quiet .")?,
        Task::required("Initialize repository", "git init --quiet --initial-branch main")?,
        Task::required("Stage generated files", "git add --all")?,
        Task::required(
            "Create initial commit",
            r#"git commit --quiet --message "Initial commit""#,
        )?,
    ]);

    if ctx.is_affirmative(CREATE_REMOTE_KEY) {
        let owner = ctx.get_str("github_username").unwrap_or(DEFAULT_OWNER);
        let package = ctx.get_str("package_name").unwrap_or("new-project");

        pipeline.push(Task::required(
            "Create remote repository",
            &format!("gh repo create {owner}/{package} --private --source . --remote origin"),
        )?);
        pipeline.push(Task::required(
            "Push initial commit",
            "git push --quiet --set-upstream origin main",
        )?);
    }

    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn context(json: &str) -> Context {
        Context::from_json(Path::new("seedling.json"), json).unwrap()
    }

    #[test]
    fn test_base_sequence_without_remote_flag() {
        let pipeline = build(&context(r#"{"package_name": "demo"}"#)).unwrap();
        assert_eq!(pipeline.len(), 8);
        assert!(pipeline
            .tasks()
            .iter()
            .all(|t| !t.name().contains("remote")));
    }

    #[test]
    fn test_negative_flag_leaves_base_sequence() {
        let pipeline = build(&context(r#"{"create_remote": "no"}"#)).unwrap();
        assert_eq!(pipeline.len(), 8);
    }

    #[test]
    fn test_affirmative_flag_appends_two_tasks() {
        let base = build(&context(r#"{"package_name": "demo"}"#)).unwrap();
        let with_remote = build(&context(
            r#"{"create_remote": "yes", "github_username": "alice", "package_name": "demo"}"#,
        ))
        .unwrap();

        assert_eq!(with_remote.len(), base.len() + 2);

        let create = &with_remote.tasks()[base.len()];
        assert_eq!(create.name(), "Create remote repository");
        assert!(create.command().contains("alice/demo"));
        assert!(create.is_required());

        let push = &with_remote.tasks()[base.len() + 1];
        assert_eq!(push.name(), "Push initial commit");
    }

    #[test]
    fn test_remote_tasks_come_after_fixed_sequence() {
        let pipeline = build(&context(r#"{"create_remote": "y"}"#)).unwrap();
        let names: Vec<_> = pipeline.tasks().iter().map(Task::name).collect();
        assert_eq!(names[5], "Initialize repository");
        assert_eq!(names[7], "Create initial commit");
        assert_eq!(names[8], "Create remote repository");
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let ctx = context(r#"{"create_remote": "yes", "github_username": "alice"}"#);
        let first = build(&ctx).unwrap();
        let second = build(&ctx).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.tasks().iter().zip(second.tasks()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_commit_message_is_one_token() {
        let pipeline = build(&context("{}")).unwrap();
        let commit = pipeline
            .tasks()
            .iter()
            .find(|t| t.name() == "Create initial commit")
            .unwrap();
        assert_eq!(commit.argv().last().unwrap(), "Initial commit");
    }
}
