// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Pre-generation discovery
//!
//! Runs before the template engine renders anything: gathers ambient
//! identity from git configuration and the set of installed runtime
//! versions, then merges the discovered values into the configuration
//! context. Every lookup here is optional; an absent tool simply leaves a
//! fallback value (or an empty list) in the context.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::context::Context;
use crate::errors::SeedlingResult;
use crate::task::Task;

/// Ambient version-control identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Values discovery merges into the context
#[derive(Debug, Serialize)]
struct Discovered {
    github_username: String,
    email: String,
    #[serde(rename = "_python_versions")]
    python_versions: Vec<String>,
}

/// Discover the user's git identity, with environment fallbacks.
pub async fn discover_identity() -> Identity {
    let name = match git_config("user.name").await {
        Some(name) => name,
        None => std::env::var("USER").unwrap_or_else(|_| "unknown_user".to_string()),
    };

    let email = match git_config("user.email").await {
        Some(email) => email,
        None => std::env::var("EMAIL").unwrap_or_else(|_| "unknown_email".to_string()),
    };

    Identity { name, email }
}

/// Look up one global git configuration item.
///
/// Routed through an optional [`Task`], so a missing git binary or an unset
/// item degrades to `None` instead of an error.
async fn git_config(item: &str) -> Option<String> {
    let task = Task::optional("Git config", &format!("git config --global {item}")).ok()?;

    match task.execute(false).await {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Enumerate installed runtime versions via `uv python list`.
///
/// Returns an empty list when the tool is missing or reports nothing; the
/// two cases are deliberately indistinguishable.
pub async fn discover_python_versions() -> Vec<String> {
    let Ok(task) = Task::optional("List Python versions", "uv python list --only-installed")
    else {
        return Vec::new();
    };

    let Ok(stdout) = task.execute(false).await else {
        return Vec::new();
    };

    parse_python_versions(&stdout)
}

/// Extract unique version numbers from `uv python list` output.
fn parse_python_versions(stdout: &str) -> Vec<String> {
    // Lines look like: cpython-3.12.4-linux-x86_64-gnu  /usr/bin/python3.12
    let pattern = Regex::new(r"-(\d+\.\d+\.\d+)-").expect("valid version pattern");

    let mut versions = Vec::new();
    for line in stdout.lines() {
        if let Some(captures) = pattern.captures(line) {
            let version = captures[1].to_string();
            if !versions.contains(&version) {
                versions.push(version);
            }
        }
    }

    debug!(count = versions.len(), "discovered python versions");
    versions
}

/// Run discovery and merge the results into the context, then persist it.
pub async fn run(ctx: &mut Context) -> SeedlingResult<()> {
    let identity = discover_identity().await;

    let discovered = Discovered {
        github_username: identity.name,
        email: identity.email,
        python_versions: discover_python_versions().await,
    };

    if let Value::Object(entries) = serde_json::to_value(discovered)? {
        ctx.merge(entries);
    }

    ctx.save()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_versions_from_uv_output() {
        let stdout = "\
cpython-3.13.1-linux-x86_64-gnu     /usr/local/bin/python3.13
cpython-3.12.4-linux-x86_64-gnu     /usr/bin/python3.12
cpython-3.12.4-linux-x86_64-gnu     /usr/bin/python3
pypy-3.10.14-linux-x86_64-gnu       /opt/pypy/bin/pypy3";

        let versions = parse_python_versions(stdout);
        assert_eq!(versions, ["3.13.1", "3.12.4", "3.10.14"]);
    }

    #[test]
    fn test_parse_versions_empty_output() {
        assert!(parse_python_versions("").is_empty());
        assert!(parse_python_versions("no pythons here\n").is_empty());
    }

    #[tokio::test]
    async fn test_identity_always_has_values() {
        // Whatever the host looks like, discovery must produce something.
        let identity = discover_identity().await;
        assert!(!identity.name.is_empty());
        assert!(!identity.email.is_empty());
    }

    #[tokio::test]
    async fn test_run_merges_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seedling.json");
        std::fs::write(&path, r#"{"package_name": "demo"}"#).unwrap();

        let mut ctx = Context::load(&path).unwrap();
        run(&mut ctx).await.unwrap();

        let reread = Context::load(&path).unwrap();
        assert_eq!(reread.get_str("package_name"), Some("demo"));
        assert!(reread.get_str("github_username").is_some());
        assert!(reread.get_str("email").is_some());
        assert!(reread.keys().any(|k| k == "_python_versions"));
    }
}
