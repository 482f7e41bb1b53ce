#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use walkdir::WalkDir;
use yay_cache_clean::installed::PackageInstalledChecker;

/// Installed-check double that records every package it is asked about.
#[derive(Debug, Default)]
pub struct FakeChecker {
    installed: Vec<String>,
    asked: RefCell<Vec<String>>,
}

impl FakeChecker {
    pub fn installed(packages: &[&str]) -> Self {
        Self {
            installed: packages.iter().map(|p| p.to_string()).collect(),
            asked: RefCell::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        let mut asked = self.asked.borrow().clone();
        asked.sort();
        asked
    }
}

impl PackageInstalledChecker for FakeChecker {
    fn is_installed(&self, package: &str) -> bool {
        self.asked.borrow_mut().push(package.to_string());
        self.installed.iter().any(|p| p == package)
    }
}

/// A throwaway cache root.
pub struct TestCache {
    dir: TempDir,
}

impl TestCache {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Create files (with `size` bytes each) at the given relative paths.
    pub fn files(&self, relatives: &[&str], size: usize) -> &Self {
        for relative in relatives {
            let child = self.dir.child(relative);
            if let Some(parent) = child.path().parent() {
                fs::create_dir_all(parent).unwrap();
            }
            child.write_binary(&vec![b'x'; size]).unwrap();
        }
        self
    }

    pub fn dirs(&self, relatives: &[&str]) -> &Self {
        for relative in relatives {
            self.dir.child(relative).create_dir_all().unwrap();
        }
        self
    }

    pub fn child(&self, relative: &str) -> ChildPath {
        self.dir.child(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Every entry under the root with its kind and size, sorted.
    pub fn snapshot(&self) -> Vec<(PathBuf, bool, u64)> {
        let mut entries: Vec<_> = WalkDir::new(self.root())
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| {
                let meta = fs::symlink_metadata(e.path()).unwrap();
                let size = if meta.is_dir() { 0 } else { meta.len() };
                (
                    e.path().strip_prefix(self.root()).unwrap().to_path_buf(),
                    meta.is_dir(),
                    size,
                )
            })
            .collect();
        entries.sort();
        entries
    }
}
