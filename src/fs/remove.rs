//! Stale artifact removal
//!
//! Regeneration must clear previously generated declarations before writing
//! new ones, otherwise declarations for removed sources stay visible to
//! downstream tooling.

use super::rimraf;
use crate::error::{FileError, Result};
use futures::future::join_all;
use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Options for resolving removal patterns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Let wildcards match names starting with `.`
    pub include_dot: bool,
}

impl RemoveOptions {
    fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: !self.include_dot,
        }
    }
}

/// Resolve glob patterns against `base_dir` into absolute paths
///
/// Relative patterns are joined onto `base_dir`; absolute patterns are used
/// as given. A leading `!` turns a pattern into an exclusion applied to the
/// whole result, wherever it appears in the list. The result is sorted,
/// free of duplicates, and never contains a path nested under another
/// returned path.
pub fn resolve_patterns<S: AsRef<str>>(
    base_dir: impl AsRef<Path>,
    patterns: &[S],
    options: &RemoveOptions,
) -> Result<Vec<PathBuf>> {
    let base_dir = base_dir.as_ref();
    let base_dir = std::path::absolute(base_dir).map_err(|e| FileError::io(base_dir, e))?;
    let escaped_base = Pattern::escape(&base_dir.to_string_lossy());
    let match_options = options.match_options();

    let mut includes = Vec::new();
    let mut excludes = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        match pattern.strip_prefix('!') {
            Some(negated) => excludes.push(compile(negated)?),
            None => includes.push(pattern),
        }
    }

    let mut matched = BTreeSet::new();
    for pattern in includes {
        let full = if Path::new(pattern).is_absolute() {
            pattern.to_string()
        } else {
            Path::new(&escaped_base)
                .join(pattern)
                .to_string_lossy()
                .into_owned()
        };

        let paths = glob::glob_with(&full, match_options).map_err(|source| FileError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        for path in paths {
            let path = path?;
            let relative = path.strip_prefix(&base_dir).unwrap_or(&path);
            let excluded = excludes.iter().any(|exclude| {
                exclude.matches_path_with(relative, match_options)
                    || exclude.matches_path_with(&path, match_options)
            });
            if !excluded {
                matched.insert(path);
            }
        }
    }

    // Descendants sort directly after their ancestor
    let mut resolved: Vec<PathBuf> = Vec::with_capacity(matched.len());
    for path in matched {
        if resolved.last().is_some_and(|parent| path.starts_with(parent)) {
            continue;
        }
        resolved.push(path);
    }

    tracing::debug!(
        "resolve_patterns: {} pattern(s) under {} matched {} path(s)",
        patterns.len(),
        base_dir.display(),
        resolved.len()
    );

    Ok(resolved)
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|source| FileError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Delete every path matching `patterns` under `base_dir`
///
/// All deletions are issued together and awaited as a group. A failure on
/// one path does not stop the others; once every deletion has finished the
/// first failure is returned as [`FileError::PartialDelete`].
pub async fn remove_by_patterns<S: AsRef<str>>(
    base_dir: impl AsRef<Path>,
    patterns: &[S],
) -> Result<()> {
    remove_by_patterns_with(base_dir, patterns, &RemoveOptions::default()).await
}

/// [`remove_by_patterns`] with explicit resolution options
pub async fn remove_by_patterns_with<S: AsRef<str>>(
    base_dir: impl AsRef<Path>,
    patterns: &[S],
    options: &RemoveOptions,
) -> Result<()> {
    let base_dir = base_dir.as_ref().to_path_buf();
    let patterns: Vec<String> = patterns.iter().map(|p| p.as_ref().to_string()).collect();
    let options = *options;

    // The glob walk reads directories synchronously
    let paths =
        tokio::task::spawn_blocking(move || resolve_patterns(&base_dir, &patterns, &options))
            .await??;

    remove_all(paths).await
}

/// Remove every path concurrently, failing only after all removals finished
async fn remove_all(paths: Vec<PathBuf>) -> Result<()> {
    let attempted = paths.len();

    let results = join_all(paths.iter().map(rimraf)).await;

    let mut failures: Vec<FileError> = results
        .into_iter()
        .filter_map(|result| result.err())
        .inspect(|e| tracing::warn!("failed to remove stale artifact: {}", e))
        .collect();

    if failures.is_empty() {
        return Ok(());
    }

    let failed = failures.len();
    Err(FileError::PartialDelete {
        failed,
        attempted,
        first: Box::new(failures.remove(0)),
    })
}
