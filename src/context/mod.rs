// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 seedling contributors

//! Configuration context
//!
//! The template's parameter set, stored as a JSON object on disk. Read once
//! before a pipeline, optionally merged with discovered values, and written
//! back once afterwards. A read-modify-write cycle preserves every key the
//! merge does not touch.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::errors::{SeedlingError, SeedlingResult};

/// Truthy spellings accepted for boolean template flags
const AFFIRMATIVE: &[&str] = &["y", "yes", "true", "1"];

/// The configuration context backing one generation run.
///
/// Exclusively owned by the invoking process for the duration of the run;
/// no locking discipline is needed.
#[derive(Debug, Clone)]
pub struct Context {
    path: PathBuf,
    values: Map<String, Value>,
}

impl Context {
    /// Load the context from a JSON file
    pub fn load(path: &Path) -> SeedlingResult<Self> {
        if !path.exists() {
            return Err(SeedlingError::ContextNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SeedlingError::ContextReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_json(path, &content)
    }

    /// Parse a context from a JSON string
    pub fn from_json(path: &Path, json: &str) -> SeedlingResult<Self> {
        let value: Value = serde_json::from_str(json)?;

        match value {
            Value::Object(values) => Ok(Self {
                path: path.to_path_buf(),
                values,
            }),
            _ => Err(SeedlingError::ContextNotObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Write the context back to its file
    pub fn save(&self) -> SeedlingResult<()> {
        let json = serde_json::to_string_pretty(&Value::Object(self.values.clone()))?;

        std::fs::write(&self.path, json).map_err(|e| SeedlingError::ContextWriteError {
            path: self.path.clone(),
            error: e.to_string(),
        })
    }

    /// File backing this context
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Whether a flag is set to an affirmative value.
    ///
    /// Accepts JSON `true` or the usual template spellings (y, yes, true, 1,
    /// case-insensitive). Absent or unrecognized values are not affirmative.
    pub fn is_affirmative(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => AFFIRMATIVE.contains(&s.to_lowercase().as_str()),
            _ => false,
        }
    }

    /// Insert or overwrite a value
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Merge entries into the context, overwriting on key collision
    pub fn merge(&mut self, entries: impl IntoIterator<Item = (String, Value)>) {
        for (key, value) in entries {
            self.values.insert(key, value);
        }
    }

    /// All keys currently present
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_untouched_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seedling.json");
        std::fs::write(
            &path,
            r#"{"package_name": "demo", "license": "MIT", "_extensions": ["jinja2_time"]}"#,
        )
        .unwrap();

        let mut ctx = Context::load(&path).unwrap();
        ctx.merge([
            ("github_username".to_string(), json!("alice")),
            ("email".to_string(), json!("alice@example.com")),
        ]);
        ctx.save().unwrap();

        let reread = Context::load(&path).unwrap();
        assert_eq!(reread.get_str("package_name"), Some("demo"));
        assert_eq!(reread.get_str("license"), Some("MIT"));
        assert_eq!(reread.get_str("github_username"), Some("alice"));
        assert!(reread.keys().any(|k| k == "_extensions"));
    }

    #[test]
    fn test_affirmative_spellings() {
        let ctx = Context::from_json(
            Path::new("seedling.json"),
            r#"{"a": "y", "b": "Yes", "c": "TRUE", "d": "1", "e": true, "f": "no", "g": ""}"#,
        )
        .unwrap();

        for key in ["a", "b", "c", "d", "e"] {
            assert!(ctx.is_affirmative(key), "{key} should be affirmative");
        }
        assert!(!ctx.is_affirmative("f"));
        assert!(!ctx.is_affirmative("g"));
        assert!(!ctx.is_affirmative("missing"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Context::from_json(Path::new("seedling.json"), "[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SeedlingError::ContextNotObject { .. }));
    }

    #[test]
    fn test_missing_file_reported() {
        let err = Context::load(Path::new("/nonexistent/seedling.json")).unwrap_err();
        assert!(matches!(err, SeedlingError::ContextNotFound { .. }));
    }
}
