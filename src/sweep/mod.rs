//! Pruning of the yay build cache.
//!
//! The cache root holds one directory per package. Inside each one yay keeps
//! built package archives (`*.tar.zst`), downloaded source archives, and the
//! `src`/`pkg` folders left behind by makepkg. A sweep can:
//!
//! - Drop whole package directories for packages no longer installed
//! - Drop `src` and `pkg` build folders
//! - Keep only the newest `keep` package archives per retention group
//! - Keep only the newest `keep` source archives per retention group
//!
//! A retention group is every archive in one package directory sharing the
//! same version prefix (the name up to its first `-<digits>.` or
//! `-<digits>:`), plus the same extension for source archives. "Newest" is
//! decided by natural ordering of file names only; timestamps are never
//! consulted.
//!
//! Without `remove`, a sweep only reports what it would delete.
//!
//! # Example
//!
//! ```no_run
//! use yay_cache_clean::sweep::Sweep;
//!
//! let sweep = Sweep::builder()
//!     .cache_root("/home/me/.cache/yay")
//!     .keep(2)
//!     .package_files(true)
//!     .saved_space(true)
//!     .remove(true)
//!     .build()?;
//!
//! let accounting = sweep.run();
//! println!("{}", sweep.summary(&accounting));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod accounting;
pub mod classify;
pub mod config;
pub mod retention;
mod size;
mod walk;

pub use accounting::RunAccounting;
pub use config::{DEFAULT_KEEP, Sweep, SweepBuilder};
pub use size::format_size;
