//! Execution of a parsed command line.
//!
//! [`execute`] resolves the cache root from the home directory and asks
//! `yay` which packages are installed. [`execute_with`] takes both from the
//! caller.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{CleanError, Result};
use crate::installed::{PackageInstalledChecker, PackageQuery};
use crate::logging::Logger;
use crate::sweep::{RunAccounting, Sweep};

/// Location of the yay cache relative to the home directory.
pub const CACHE_DIR: &str = ".cache/yay";

/// The cache root for the current user.
pub fn default_cache_root() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(CleanError::HomeNotFound)?;
    Ok(home.join(CACHE_DIR))
}

/// Execute a sweep based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<RunAccounting> {
    let cache_root = default_cache_root()?;
    execute_with(cli, &cache_root, &PackageQuery::yay())
}

/// Execute a sweep over `cache_root` with an explicit installed-check.
///
/// Prints the summary unless quiet, followed by any removal failures on
/// stderr.
pub fn execute_with(
    cli: &Cli,
    cache_root: &Path,
    checker: &dyn PackageInstalledChecker,
) -> Result<RunAccounting> {
    let log = Logger::new(cli.verbose(), cli.quiet());

    let sweep = Sweep::builder()
        .cache_root(cache_root)
        .keep(cli.keep())
        .saved_space(cli.saved_space())
        .not_installed(cli.not_installed())
        .package_files(cli.package_files())
        .build_folders(cli.build_folders())
        .source_files(cli.source_files())
        .remove(cli.remove())
        .verbose(cli.verbose())
        .quiet(cli.quiet())
        .build()?;

    let accounting = sweep.run_with(checker);

    log.summary(sweep.summary(&accounting));
    for failure in &accounting.failures {
        log.warn(format!("Warning: {}", failure_message(failure)));
    }

    Ok(accounting)
}

fn failure_message(failure: &CleanError) -> String {
    match failure {
        CleanError::IoError { path, source } => {
            format!("could not remove '{}': {source}", path.display())
        }
        other => other.to_string(),
    }
}
