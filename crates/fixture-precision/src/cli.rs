use std::path::PathBuf;

use clap::Parser;

use crate::error::{RewriteError, RewriteResult};
use crate::walker::{DEFAULT_FIXTURES_ROOT, DEFAULT_FIXTURE_FILE};

#[derive(Debug, Parser)]
#[command(
    name = "fixture-precision",
    about = "rescale fixture size/price fields to 1e8 fixed-point integers"
)]
pub struct Args {
    #[arg(long, env = "FIXTURE_PRECISION_ROOT", default_value = DEFAULT_FIXTURES_ROOT)]
    pub root: PathBuf,
    #[arg(long, env = "FIXTURE_PRECISION_FILE", default_value = DEFAULT_FIXTURE_FILE)]
    pub file_name: String,
}

/// Fixture names are bare `.json` file names inside a case directory.
pub fn validate_file_name(name: &str) -> RewriteResult<()> {
    let Some(stem) = name.strip_suffix(".json") else {
        return Err(RewriteError::InvalidArgument(format!(
            "file name '{name}' must end in .json"
        )));
    };
    if stem.is_empty() || stem.starts_with('.') {
        return Err(RewriteError::InvalidArgument(format!(
            "file name '{name}' needs a stem that does not start with '.'"
        )));
    }
    if let Some(bad) = stem
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')))
    {
        return Err(RewriteError::InvalidArgument(format!(
            "file name '{name}' contains '{bad}'; allowed: [A-Za-z0-9._-]"
        )));
    }
    Ok(())
}
