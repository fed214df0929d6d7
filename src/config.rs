//! Code generation settings loaded from TOML

use crate::fs::{remove_by_patterns_with, RemoveOptions};
use crate::stamp::{Stamper, DEFAULT_TOOL_NAME};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by stamping and stale artifact cleanup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Tool name written into generated headers
    pub tool_name: String,

    /// Patterns purged before regeneration, relative to the base directory
    pub stale_patterns: Vec<String>,

    /// Let wildcards in `stale_patterns` match dot files
    pub include_dot: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            stale_patterns: vec!["__generated__/**/*.d.ts".to_string()],
            include_dot: false,
        }
    }
}

impl CodegenConfig {
    /// Load config from `path`, falling back to defaults when it is missing
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn stamper(&self) -> Stamper {
        Stamper::new(self.tool_name.clone())
    }

    pub fn remove_options(&self) -> RemoveOptions {
        RemoveOptions {
            include_dot: self.include_dot,
        }
    }

    /// Delete everything under `base_dir` matching `stale_patterns`
    pub async fn remove_stale(&self, base_dir: impl AsRef<Path>) -> crate::Result<()> {
        remove_by_patterns_with(base_dir, self.stale_patterns.as_slice(), &self.remove_options()).await
    }
}
