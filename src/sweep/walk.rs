use std::path::Path;

use walkdir::{DirEntry, WalkDir};

/// What the walk should do after visiting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    Continue,
    /// Do not descend into this directory. Only meaningful for directories.
    SkipSubtree,
    /// Stop the walk entirely
    Abort,
}

/// Depth-first walk of `root`, handing every entry to `visitor`.
///
/// Errors on individual entries are skipped. If the root itself cannot be
/// read, the walk ends without visiting anything.
pub(crate) fn walk(root: &Path, mut visitor: impl FnMut(&DirEntry) -> Visit) {
    let mut entries = WalkDir::new(root).into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => break,
            Err(_) => continue,
        };

        match visitor(&entry) {
            Visit::Continue => {}
            Visit::SkipSubtree => {
                if entry.file_type().is_dir() {
                    entries.skip_current_dir();
                }
            }
            Visit::Abort => break,
        }
    }
}
