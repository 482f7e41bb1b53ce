//! # yay-cache-clean
//!
//! Keeps the yay build cache (`~/.cache/yay`) from growing without bound.
//!
//! ## Overview
//!
//! yay builds every AUR package inside its own directory under the cache
//! root and leaves behind each built package archive, each downloaded source
//! archive, and the makepkg `src`/`pkg` folders. yay-cache-clean walks that
//! tree once and:
//!
//! - groups archives by package directory and version prefix, keeping the
//!   newest `--keep` of each group (newest by natural file name order)
//! - optionally drops the directories of packages that are no longer
//!   installed
//! - optionally drops leftover `src` and `pkg` folders
//!
//! Nothing is deleted unless `--remove` is given.
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Runs a sweep from parsed arguments and prints the summary
//! - [`error`]: Error types with thiserror + miette
//! - [`installed`]: The installed-package query and its trait seam
//! - [`sweep`]: Classification, retention and the cache walk itself
//!
//! ## Library Usage
//!
//! ```no_run
//! use yay_cache_clean::cli::Cli;
//! use yay_cache_clean::commands;
//!
//! let cli = Cli::builder().package_files(true).keep(2).build();
//! let accounting = commands::execute(&cli)?;
//! println!("{} candidates", accounting.removed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a combination of:
//! - `thiserror` for strongly-typed errors
//! - `miette` for rich diagnostic output in CLI
//!
//! Only a missing home directory fails a run. Everything else is best
//! effort: unreadable entries are skipped and removal failures are reported
//! after the summary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod installed;
pub mod sweep;

// Internal modules
mod logging;
