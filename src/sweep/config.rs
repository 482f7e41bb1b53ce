use std::fs;
use std::path::{Path, PathBuf};

use walkdir::DirEntry;

use super::accounting::RunAccounting;
use super::classify::{Role, classify};
use super::retention::RetentionTable;
use super::size::measure_size;
use super::walk::{Visit, walk};
use crate::error::{CleanError, Result};
use crate::installed::{PackageInstalledChecker, PackageQuery};
use crate::logging::Logger;

/// Default number of versions kept per retention group.
pub const DEFAULT_KEEP: usize = 3;

/// Deletes one target, a whole tree for directories.
pub(crate) type Remover = fn(&Path) -> std::io::Result<()>;

/// One cleaning run over a yay cache root.
#[derive(Debug)]
pub struct Sweep {
    /// Directory whose children are package directories
    cache_root: PathBuf,
    /// Versions kept per retention group
    keep: usize,
    /// Measure targets before acting on them
    saved_space: bool,
    /// Drop package directories whose package is not installed
    not_installed: bool,
    /// Prune stale `*.tar.zst` package archives
    package_files: bool,
    /// Drop `src` and `pkg` build folders
    build_folders: bool,
    /// Prune stale source archives
    source_files: bool,
    /// Delete for real; otherwise only report
    remove: bool,
    verbose: bool,
    quiet: bool,
    remover: Remover,
}

/// What a removal target is, for reporting.
#[derive(Debug, Clone, Copy)]
enum Target {
    NotInstalled,
    BuildFolder,
    Package,
    Source,
}

impl Target {
    fn message(self, removing: bool) -> &'static str {
        match (self, removing) {
            (Target::NotInstalled, true) => "Not installed, removing",
            (Target::NotInstalled, false) => "Not installed",
            (Target::BuildFolder, true) => "Removing",
            (Target::BuildFolder, false) => "Build or source folder found",
            (Target::Package | Target::Source, true) => "Removing:",
            (Target::Package, false) => "Exceeding old package:",
            (Target::Source, false) => "Exceeding old source file:",
        }
    }
}

impl Sweep {
    /// Creates a new builder for [`Sweep`]
    pub fn builder() -> SweepBuilder {
        SweepBuilder::default()
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    pub fn saved_space(&self) -> bool {
        self.saved_space
    }

    pub fn not_installed(&self) -> bool {
        self.not_installed
    }

    pub fn package_files(&self) -> bool {
        self.package_files
    }

    pub fn build_folders(&self) -> bool {
        self.build_folders
    }

    pub fn source_files(&self) -> bool {
        self.source_files
    }

    pub fn remove(&self) -> bool {
        self.remove
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Run the sweep, asking `yay` which packages are installed.
    pub fn run(&self) -> RunAccounting {
        self.run_with(&PackageQuery::yay())
    }

    /// Run the sweep with the given installed-package checker.
    ///
    /// 1. Walk the cache root once. Package directories of uninstalled
    ///    packages and build folders are handled as soon as they are seen and
    ///    never descended into. Archive files are bucketed into retention
    ///    groups.
    /// 2. Prune every package-archive group, then every source-archive group,
    ///    down to `keep` members.
    ///
    /// Failures on individual entries never stop the run; removal failures
    /// end up in [`RunAccounting::failures`].
    pub fn run_with(&self, checker: &dyn PackageInstalledChecker) -> RunAccounting {
        let log = Logger::new(self.verbose, self.quiet);
        let mut accounting = RunAccounting::default();
        let mut packages = RetentionTable::default();
        let mut sources = RetentionTable::default();

        walk(&self.cache_root, |entry| {
            self.visit(entry, checker, log, &mut accounting, &mut packages, &mut sources)
        });

        if self.package_files {
            for entry in packages.select_for_removal(self.keep) {
                self.dispose(&entry.path(), Target::Package, log, &mut accounting);
            }
        }

        if self.source_files {
            for entry in sources.select_for_removal(self.keep) {
                self.dispose(&entry.path(), Target::Source, log, &mut accounting);
            }
        }

        accounting
    }

    fn visit(
        &self,
        entry: &DirEntry,
        checker: &dyn PackageInstalledChecker,
        log: Logger,
        accounting: &mut RunAccounting,
        packages: &mut RetentionTable,
        sources: &mut RetentionTable,
    ) -> Visit {
        let is_dir = entry.file_type().is_dir();

        match classify(&self.cache_root, entry.path(), is_dir) {
            // A cache root that is not a directory holds nothing to prune
            Role::Root if is_dir => Visit::Continue,
            Role::Root => Visit::Abort,
            Role::PackageDirectory { name } => {
                if self.not_installed && !checker.is_installed(&name) {
                    self.dispose(entry.path(), Target::NotInstalled, log, accounting);
                    Visit::SkipSubtree
                } else {
                    Visit::Continue
                }
            }
            Role::BuildFolder => {
                if self.build_folders {
                    self.dispose(entry.path(), Target::BuildFolder, log, accounting);
                }
                Visit::SkipSubtree
            }
            Role::PackageArchive(archive) => {
                packages.insert(archive);
                Visit::Continue
            }
            Role::SourceArchive(archive) => {
                sources.insert(archive);
                Visit::Continue
            }
            Role::Ignored => Visit::Continue,
            Role::Unrecognized => Visit::SkipSubtree,
        }
    }

    /// Measure, report and (when removing) delete a single target.
    fn dispose(&self, path: &Path, target: Target, log: Logger, accounting: &mut RunAccounting) {
        let size = if self.saved_space {
            measure_size(path)
        } else {
            0
        };

        if self.remove
            && let Err(source) = (self.remover)(path)
        {
            accounting.record_failure(CleanError::IoError {
                path: path.to_path_buf(),
                source,
            });
        }

        log.item(format!("{} {}", target.message(self.remove), path.display()));
        accounting.record(size);
    }

    /// The summary line for a finished run.
    pub fn summary(&self, accounting: &RunAccounting) -> String {
        accounting.summary(self.remove, self.saved_space)
    }
}

/// Remove a directory tree or a single file.
fn remove_path(path: &Path) -> std::io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Builder for [`Sweep`]
#[derive(Debug, Default)]
pub struct SweepBuilder {
    cache_root: Option<PathBuf>,
    keep: Option<usize>,
    saved_space: bool,
    not_installed: bool,
    package_files: bool,
    build_folders: bool,
    source_files: bool,
    remove: bool,
    verbose: bool,
    quiet: bool,
    remover: Option<Remover>,
}

impl SweepBuilder {
    /// Set the cache root to scan
    pub fn cache_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_root = Some(dir.into());
        self
    }

    /// Set how many versions to keep per group
    pub fn keep(mut self, keep: usize) -> Self {
        self.keep = Some(keep);
        self
    }

    /// Enable size accounting
    pub fn saved_space(mut self, enabled: bool) -> Self {
        self.saved_space = enabled;
        self
    }

    /// Enable pruning of package directories for uninstalled packages
    pub fn not_installed(mut self, enabled: bool) -> Self {
        self.not_installed = enabled;
        self
    }

    /// Enable pruning of package archives
    pub fn package_files(mut self, enabled: bool) -> Self {
        self.package_files = enabled;
        self
    }

    /// Enable pruning of `src` and `pkg` build folders
    pub fn build_folders(mut self, enabled: bool) -> Self {
        self.build_folders = enabled;
        self
    }

    /// Enable pruning of source archives
    pub fn source_files(mut self, enabled: bool) -> Self {
        self.source_files = enabled;
        self
    }

    /// Delete targets instead of only reporting them
    pub fn remove(mut self, enabled: bool) -> Self {
        self.remove = enabled;
        self
    }

    /// Print a line per target
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Suppress the summary
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Replace the function that deletes targets
    #[cfg(test)]
    pub(crate) fn remover(mut self, remover: Remover) -> Self {
        self.remover = Some(remover);
        self
    }

    /// Build the [`Sweep`]
    pub fn build(self) -> Result<Sweep> {
        let cache_root = self.cache_root.ok_or_else(|| CleanError::ConfigError {
            message: "Cache root is required".to_string(),
        })?;

        Ok(Sweep {
            cache_root,
            keep: self.keep.unwrap_or(DEFAULT_KEEP),
            saved_space: self.saved_space,
            not_installed: self.not_installed,
            package_files: self.package_files,
            build_folders: self.build_folders,
            source_files: self.source_files,
            remove: self.remove,
            verbose: self.verbose,
            quiet: self.quiet,
            remover: self.remover.unwrap_or(remove_path),
        })
    }
}
