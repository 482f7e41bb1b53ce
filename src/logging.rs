use std::fmt::Display;

#[derive(Clone, Copy, Debug)]
pub struct Logger {
    verbose: bool,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Per-item line, printed only in verbose mode.
    pub fn item(&self, message: impl Display) {
        if self.verbose {
            println!("{message}");
        }
    }

    pub fn summary(&self, message: impl Display) {
        if !self.quiet {
            println!("{message}");
        }
    }

    pub fn warn(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}
