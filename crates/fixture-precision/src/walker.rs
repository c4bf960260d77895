use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{RewriteError, RewriteResult};
use crate::rewrite::{rewrite_fixture, FixtureReport};

pub const DEFAULT_FIXTURES_ROOT: &str = "unit";
pub const DEFAULT_FIXTURE_FILE: &str = "send.json";

/// Every entry directly under `root`, joined with `file_name`, in name order.
/// Entries are not filtered: a stray file under `root` yields a path that
/// will fail to load.
pub fn fixture_paths(root: &Path, file_name: &str) -> RewriteResult<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|error| RewriteError::from(error).in_fixture(root))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| RewriteError::from(error).in_fixture(root))?;
        names.push(entry.file_name());
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| root.join(name).join(file_name))
        .collect())
}

pub fn rewrite_all(root: &Path, file_name: &str) -> RewriteResult<Vec<FixtureReport>> {
    let paths = fixture_paths(root, file_name)?;
    info!(root = %root.display(), fixtures = paths.len(), "rewriting fixtures");

    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        reports.push(rewrite_fixture(&path)?);
    }
    Ok(reports)
}
