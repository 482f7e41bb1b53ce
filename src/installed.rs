//! Installed-package queries against the host package manager.
//!
//! The sweep only needs a yes/no answer per package directory, so the query
//! sits behind [`PackageInstalledChecker`] and tests substitute a fake.
//!
//! There are no retries: a query that fails to spawn, is killed, or exits
//! non-zero all read as "not installed". A transient failure is therefore
//! indistinguishable from a missing package.

use std::process::{Command, Stdio};

/// Answers whether a package is currently installed on the host.
pub trait PackageInstalledChecker {
    /// Returns `true` only when the package is confirmed installed.
    fn is_installed(&self, package: &str) -> bool;
}

impl<F> PackageInstalledChecker for F
where
    F: Fn(&str) -> bool,
{
    fn is_installed(&self, package: &str) -> bool {
        self(package)
    }
}

/// Runs `<program> -Qi <package>` and treats exit status 0 as installed.
#[derive(Debug, Clone)]
pub struct PackageQuery {
    program: String,
}

impl PackageQuery {
    /// Query through an arbitrary pacman-compatible front-end.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Query through `yay`, the owner of the cache being cleaned.
    pub fn yay() -> Self {
        Self::new("yay")
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for PackageQuery {
    fn default() -> Self {
        Self::yay()
    }
}

impl PackageInstalledChecker for PackageQuery {
    fn is_installed(&self, package: &str) -> bool {
        Command::new(&self.program)
            .arg("-Qi")
            .arg(package)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
