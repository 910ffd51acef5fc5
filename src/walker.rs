//! Depth-first filesystem walk feeding discovered files into the registry.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, TallyError};
use crate::registry::BucketRegistry;

/// Single-threaded depth-first traversal rooted at one directory.
///
/// Uses an explicit stack rather than recursion so deeply nested trees
/// cannot exhaust the call stack. Directory entries are taken in the order
/// the OS returns them (not sorted); hidden files are included; symlinks
/// are neither followed nor counted. Any enumeration or metadata failure
/// aborts the whole walk; there is no per-file recovery.
pub struct TreeWalker {
    root: PathBuf,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the tree, offering every regular file to every bucket.
    pub fn walk(&self, registry: &mut BucketRegistry) -> Result<()> {
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|source| TallyError::Walk {
                path: dir.clone(),
                source,
            })?;

            let mut subdirs = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|source| TallyError::Walk {
                    path: dir.clone(),
                    source,
                })?;
                let path = entry.path();
                let file_type = entry.file_type().map_err(|source| TallyError::Walk {
                    path: path.clone(),
                    source,
                })?;

                if file_type.is_dir() {
                    subdirs.push(path);
                } else if file_type.is_file() {
                    let size = entry
                        .metadata()
                        .map_err(|source| TallyError::Walk {
                            path: path.clone(),
                            source,
                        })?
                        .len();
                    debug!(path = %path.display(), size, "file");
                    registry.accumulate(&path, size);
                }
                // Symlinks fall through untouched.
            }

            // Reverse so the first subdirectory seen is the next one walked.
            subdirs.reverse();
            pending.extend(subdirs);
        }

        Ok(())
    }
}
