use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

/// Extensions that mark a file as a downloaded source archive.
pub const SOURCE_EXTENSIONS: &[&str] = &["asc", "bz2", "deb", "gz", "jar", "rpm", "zip", "zst", "zx"];

/// Suffix of a built package archive.
pub const PACKAGE_SUFFIX: &str = ".tar.zst";

/// Names of build leftovers inside a package directory.
pub const BUILD_FOLDERS: &[&str] = &["src", "pkg"];

/// A cached file one level inside a package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// The package directory holding the file
    pub parent: PathBuf,
    pub file_name: String,
    /// File name up to its first version-like suffix
    pub prefix: String,
    /// Set for source archives only
    pub extension: Option<String>,
}

impl ArchiveEntry {
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.file_name)
    }
}

/// What a walked path means to the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// The cache root itself
    Root,
    /// A direct child directory of the root, named after a package
    PackageDirectory { name: String },
    /// A `src` or `pkg` directory inside a package directory
    BuildFolder,
    PackageArchive(ArchiveEntry),
    SourceArchive(ArchiveEntry),
    /// A file with no role; left alone
    Ignored,
    /// A directory outside the recognized layout; not descended into
    Unrecognized,
}

/// Classify `path` relative to the cache `root`.
///
/// Only the root, its direct child directories, and entries exactly two
/// levels down carry a role.
///
/// Names that are not valid UTF-8 are handled lossily. A package directory
/// keeps its name with U+FFFD in place of the bad bytes, so the installed
/// check sees that name. A file is [`Role::Ignored`] and never pruned.
pub fn classify(root: &Path, path: &Path, is_dir: bool) -> Role {
    let Ok(relative) = path.strip_prefix(root) else {
        return if is_dir { Role::Unrecognized } else { Role::Ignored };
    };

    match (relative.components().count(), is_dir) {
        (0, _) => Role::Root,
        (1, true) => Role::PackageDirectory {
            name: relative.to_string_lossy().into_owned(),
        },
        (2, true) => {
            let is_build_folder = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| BUILD_FOLDERS.contains(&name));
            if is_build_folder {
                Role::BuildFolder
            } else {
                Role::Unrecognized
            }
        }
        (2, false) => classify_file(path),
        (_, true) => Role::Unrecognized,
        (_, false) => Role::Ignored,
    }
}

fn classify_file(path: &Path) -> Role {
    let (Some(parent), Some(file_name)) = (path.parent(), path.file_name().and_then(|n| n.to_str()))
    else {
        return Role::Ignored;
    };

    let prefix = version_prefix(file_name).to_string();

    if file_name.ends_with(PACKAGE_SUFFIX) {
        return Role::PackageArchive(ArchiveEntry {
            parent: parent.to_path_buf(),
            file_name: file_name.to_string(),
            prefix,
            extension: None,
        });
    }

    match source_extension(file_name) {
        Some(ext) => Role::SourceArchive(ArchiveEntry {
            parent: parent.to_path_buf(),
            file_name: file_name.to_string(),
            prefix,
            extension: Some(ext.to_string()),
        }),
        None => Role::Ignored,
    }
}

/// Strip the first `-<digits>.` or `-<digits>:` and everything after it.
///
/// Names without such a sequence are returned whole.
pub fn version_prefix(file_name: &str) -> &str {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();

    let re = VERSION_RE
        .get_or_init(|| Regex::new(r"-\d+[.:]").expect("version suffix regex should compile"));

    match re.find(file_name) {
        Some(found) => &file_name[..found.start()],
        None => file_name,
    }
}

/// The text after the final dot, if it is an allow-listed source extension.
pub fn source_extension(file_name: &str) -> Option<&str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    SOURCE_EXTENSIONS.contains(&ext).then_some(ext)
}
