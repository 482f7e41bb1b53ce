//! Command-line interface definitions for yay-cache-clean.
//!
//! Every flag also reads an environment variable, so a default policy can
//! live in the shell profile.
//!
//! # Example
//!
//! ```no_run
//! use yay_cache_clean::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! if cli.remove() {
//!     println!("keeping {} versions per group", cli.keep());
//! }
//! ```

use clap::{ArgAction, CommandFactory, Parser};

use crate::sweep::DEFAULT_KEEP;

/// Command-line interface for yay-cache-clean.
///
/// Without `--remove` the run is a dry run: candidates are counted and, with
/// `--verbose`, listed, but nothing is deleted.
#[derive(Debug, Parser)]
#[command(
    name = "yay-cache-clean",
    bin_name = "yay-cache-clean",
    version,
    about = "Prune stale package and source archives from the yay build cache",
    long_about = None,
    disable_help_flag = true
)]
pub struct Cli {
    /// Calculate saved space
    #[arg(short = 'c', long, env = "YAY_CACHE_CLEAN_SAVED_SPACE")]
    saved_space: bool,

    /// Check for folders of packages that are not installed
    #[arg(short = 'i', long, env = "YAY_CACHE_CLEAN_NOT_INSTALLED")]
    not_installed: bool,

    /// Number of package and source files to keep per group
    #[arg(short, long, default_value_t = DEFAULT_KEEP, env = "YAY_CACHE_CLEAN_KEEP")]
    keep: usize,

    /// Check for old package files (*.tar.zst)
    #[arg(short, long, env = "YAY_CACHE_CLEAN_PACKAGE_FILES")]
    package_files: bool,

    /// Check for src and pkg folders
    #[arg(short, long, env = "YAY_CACHE_CLEAN_BUILD_FOLDERS")]
    build_folders: bool,

    /// Silence the summary
    #[arg(short, long, env = "YAY_CACHE_CLEAN_QUIET")]
    quiet: bool,

    /// Remove files and folders from the system
    #[arg(short, long, env = "YAY_CACHE_CLEAN_REMOVE")]
    remove: bool,

    /// Check for old source files
    #[arg(short, long, env = "YAY_CACHE_CLEAN_SOURCE_FILES")]
    source_files: bool,

    /// Print every file and folder found
    #[arg(short, long, env = "YAY_CACHE_CLEAN_VERBOSE")]
    verbose: bool,

    /// Display this help and exit
    #[arg(long, action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// `--help` prints usage to stderr and exits with status 1.
    pub fn parse_args() -> Self {
        let cli = Self::parse();

        if cli.help {
            eprint!("{}", Self::command().render_help());
            std::process::exit(1);
        }

        cli
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    pub fn saved_space(&self) -> bool {
        self.saved_space
    }

    pub fn not_installed(&self) -> bool {
        self.not_installed
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    pub fn package_files(&self) -> bool {
        self.package_files
    }

    pub fn build_folders(&self) -> bool {
        self.build_folders
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn remove(&self) -> bool {
        self.remove
    }

    pub fn source_files(&self) -> bool {
        self.source_files
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether `--help` was requested
    pub fn help(&self) -> bool {
        self.help
    }
}

/// Builder for [`Cli`]
#[derive(Debug)]
pub struct CliBuilder {
    saved_space: bool,
    not_installed: bool,
    keep: usize,
    package_files: bool,
    build_folders: bool,
    quiet: bool,
    remove: bool,
    source_files: bool,
    verbose: bool,
}

impl Default for CliBuilder {
    fn default() -> Self {
        Self {
            saved_space: false,
            not_installed: false,
            keep: DEFAULT_KEEP,
            package_files: false,
            build_folders: false,
            quiet: false,
            remove: false,
            source_files: false,
            verbose: false,
        }
    }
}

impl CliBuilder {
    pub fn saved_space(mut self, enabled: bool) -> Self {
        self.saved_space = enabled;
        self
    }

    pub fn not_installed(mut self, enabled: bool) -> Self {
        self.not_installed = enabled;
        self
    }

    pub fn keep(mut self, keep: usize) -> Self {
        self.keep = keep;
        self
    }

    pub fn package_files(mut self, enabled: bool) -> Self {
        self.package_files = enabled;
        self
    }

    pub fn build_folders(mut self, enabled: bool) -> Self {
        self.build_folders = enabled;
        self
    }

    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    pub fn remove(mut self, enabled: bool) -> Self {
        self.remove = enabled;
        self
    }

    pub fn source_files(mut self, enabled: bool) -> Self {
        self.source_files = enabled;
        self
    }

    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Cli {
        Cli {
            saved_space: self.saved_space,
            not_installed: self.not_installed,
            keep: self.keep,
            package_files: self.package_files,
            build_folders: self.build_folders,
            quiet: self.quiet,
            remove: self.remove,
            source_files: self.source_files,
            verbose: self.verbose,
            help: false,
        }
    }
}
