//! # yay-cache-clean CLI
//!
//! Prunes stale package and source archives from the yay build cache.
//!
//! ## Quick Start
//!
//! ```bash
//! # See what would go, with sizes
//! yay-cache-clean -pbsc -v
//!
//! # Keep two versions of everything and delete the rest
//! yay-cache-clean -pbs -k 2 -r
//!
//! # Also drop caches of packages that were uninstalled
//! yay-cache-clean -pbsi -r
//! ```
//!
//! ## Environment Variables
//!
//! Every flag has a `YAY_CACHE_CLEAN_*` counterpart, for example
//! `YAY_CACHE_CLEAN_KEEP=2` or `YAY_CACHE_CLEAN_REMOVE=true`.

use std::io::IsTerminal;

use yay_cache_clean::cli::Cli;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse_args();

    yay_cache_clean::commands::execute(&cli)
        .map(|_| ())
        .map_err(Into::into)
}
