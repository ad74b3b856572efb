use crate::error::{IndexerError, Result};
use ignore::{Walk, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Walker behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Visit directory entries in file-name order instead of traversal order
    pub sorted: bool,

    /// Follow symbolic links
    pub follow_links: bool,
}

/// Scanner yielding every regular file under a corpus root
pub struct FileScanner {
    root: PathBuf,
    options: ScanOptions,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    pub fn with_options(root: impl AsRef<Path>, options: ScanOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Lazily walk the corpus. Fails if the root is missing, not a directory,
    /// or cannot be listed; errors below the root are only logged.
    pub fn walk(&self) -> Result<FileWalk> {
        let invalid = |e: std::io::Error| {
            IndexerError::InvalidPath(format!("{}: {e}", self.root.display()))
        };
        let meta = fs::metadata(&self.root).map_err(invalid)?;
        if !meta.is_dir() {
            return Err(IndexerError::InvalidPath(format!(
                "Not a directory: {}",
                self.root.display()
            )));
        }
        fs::read_dir(&self.root).map_err(invalid)?;

        let mut builder = WalkBuilder::new(&self.root);
        // Mail folders are data, not source trees: no hidden/ignore-file filtering.
        builder
            .standard_filters(false)
            .follow_links(self.options.follow_links);
        if self.options.sorted {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        Ok(FileWalk {
            inner: builder.build(),
        })
    }

    /// Collect the walk into a Vec
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let files: Vec<PathBuf> = self.walk()?.collect();
        log::info!("Found {} files under {}", files.len(), self.root.display());
        Ok(files)
    }
}

/// Lazy iterator over regular files
pub struct FileWalk {
    inner: Walk,
}

impl Iterator for FileWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        return Some(entry.into_path());
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }
    }
}
