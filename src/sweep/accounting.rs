use colored::Colorize;

use super::size::format_size;
use crate::error::CleanError;

/// Counters for a single sweep.
///
/// Created when a sweep starts and handed back to the caller when it ends.
#[derive(Debug, Default)]
pub struct RunAccounting {
    /// Targets removed, or reported as candidates in a dry run
    pub removed: usize,
    /// Bytes measured before each action; stays 0 without size accounting
    pub reclaimed: u64,
    /// Removals that failed; the sweep carried on past each of them
    pub failures: Vec<CleanError>,
}

impl RunAccounting {
    pub(crate) fn record(&mut self, size: u64) {
        self.removed += 1;
        self.reclaimed += size;
    }

    pub(crate) fn record_failure(&mut self, failure: CleanError) {
        self.failures.push(failure);
    }

    /// The closing summary line.
    ///
    /// `removing` selects the wording for a real run versus a dry run, and
    /// `with_size` appends the reclaimed total.
    pub fn summary(&self, removing: bool, with_size: bool) -> String {
        let size = if with_size {
            format!(" (disk space saved: {})", format_size(self.reclaimed))
        } else {
            String::new()
        };

        let message = if removing {
            format!(" finished: {} files removed{size}", self.removed)
        } else {
            format!(" finished dry run: {} candidates{size}", self.removed)
        };

        format!("{}{}", "==>".green(), message.bold())
    }
}
