//! Error types for yay-cache-clean.
//!
//! Errors are defined with `thiserror` and carry `miette` diagnostics so the
//! binary can render them with codes and help text.
//!
//! # Error Handling Strategy
//!
//! - Only [`CleanError::HomeNotFound`] aborts a run.
//! - Stat and walk errors on individual cache entries are swallowed by the
//!   sweep and never become a [`CleanError`].
//! - Deletion failures are collected as [`CleanError::IoError`] values in the
//!   run accounting and reported after the summary.
//!
//! # Example
//!
//! ```no_run
//! use yay_cache_clean::error::{CleanError, Result};
//!
//! fn cache_root() -> Result<std::path::PathBuf> {
//!     let home = home::home_dir().ok_or(CleanError::HomeNotFound)?;
//!     Ok(home.join(".cache/yay"))
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur while cleaning the cache
#[derive(Error, Debug, Diagnostic)]
pub enum CleanError {
    /// The user's home directory could not be resolved.
    ///
    /// The cache root lives under `<home>/.cache/yay`, so nothing can be
    /// scanned without it.
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(yay_cache_clean::env::home_not_found),
        help("Make sure HOME is set for the current user.")
    )]
    HomeNotFound,

    /// File system I/O error on a specific path.
    ///
    /// Produced when a stale entry could not be removed. The sweep keeps
    /// going and lists these after the summary.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(yay_cache_clean::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid programmatic configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(yay_cache_clean::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CleanError>;
