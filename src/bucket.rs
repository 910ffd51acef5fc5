//! The bucket family: per-rule accumulators fed by the tree walk.
//!
//! Every discovered file is offered to every bucket; each bucket decides
//! on its own whether the file belongs to it. Buckets are deliberately not
//! mutually exclusive: an exact-path bucket for a parent directory and a
//! glob bucket matching the same file both count it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::format::format_bytes;
use crate::matcher::{is_under, matches_glob};

/// One line of the final report: label, raw byte count, human-readable size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub bytes: u64,
    pub human: String,
}

impl ReportRow {
    fn new(label: String, bytes: u64) -> Self {
        Self {
            human: format_bytes(bytes),
            label,
            bytes,
        }
    }
}

/// A named accumulator that aggregates sizes of matching files.
///
/// Totals only ever grow during a walk; `report` is called exactly once,
/// after the walk completes.
pub trait Bucket: std::fmt::Debug {
    /// Offer a discovered file to the bucket. Non-matching paths are a no-op.
    fn accumulate(&mut self, path: &Path, size: u64);

    /// Produce this bucket's report rows.
    fn report(&self) -> Vec<ReportRow>;
}

/// Total size of every file at or under one directory subtree.
///
/// Containment is checked against resolved paths (see [`is_under`]), so a
/// file reached through a symlinked spelling of the root still counts.
#[derive(Debug)]
pub struct ExactPathBucket {
    root: PathBuf,
    total: u64,
}

impl ExactPathBucket {
    pub fn new(root: PathBuf) -> Self {
        Self { root, total: 0 }
    }
}

impl Bucket for ExactPathBucket {
    fn accumulate(&mut self, path: &Path, size: u64) {
        if is_under(path, &self.root) {
            self.total += size;
        }
    }

    fn report(&self) -> Vec<ReportRow> {
        vec![ReportRow::new(self.root.display().to_string(), self.total)]
    }
}

/// Total size of files whose path matches one glob pattern.
#[derive(Debug)]
pub struct GlobBucket {
    pattern: String,
    total: u64,
}

impl GlobBucket {
    pub fn new(pattern: String) -> Self {
        Self { pattern, total: 0 }
    }
}

impl Bucket for GlobBucket {
    fn accumulate(&mut self, path: &Path, size: u64) {
        if matches_glob(path, &self.pattern) {
            self.total += size;
        }
    }

    fn report(&self) -> Vec<ReportRow> {
        vec![ReportRow::new(self.pattern.clone(), self.total)]
    }
}

/// Per-immediate-child subtotals under a root, plus a direct-files total.
///
/// Membership is a raw string-prefix test on the unresolved path. That is
/// intentionally cheaper (and stricter about spelling) than
/// [`ExactPathBucket`]'s resolved containment; the walk hands out paths
/// under the resolved scan root, so spellings line up in practice.
#[derive(Debug)]
pub struct ChildBreakdownBucket {
    root: PathBuf,
    root_prefix: String,
    children: HashMap<String, u64>,
    direct_files: u64,
    total: u64,
}

impl ChildBreakdownBucket {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root_prefix: root.display().to_string(),
            root,
            children: HashMap::new(),
            direct_files: 0,
            total: 0,
        }
    }

    /// Name of the immediate child of `root` on the way down to `path`, or
    /// `None` when `path` sits directly under `root` (or the parent chain
    /// never reaches `root` at all).
    fn immediate_child(&self, path: &Path) -> Option<String> {
        let mut current = path;
        loop {
            let parent = current.parent()?;
            if parent == self.root {
                if current == path {
                    // The file itself is a direct child of the root.
                    return None;
                }
                return current
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
            }
            current = parent;
        }
    }
}

impl Bucket for ChildBreakdownBucket {
    fn accumulate(&mut self, path: &Path, size: u64) {
        if !path.to_string_lossy().starts_with(&self.root_prefix) {
            return;
        }
        self.total += size;
        match self.immediate_child(path) {
            Some(name) => *self.children.entry(name).or_insert(0) += size,
            None => self.direct_files += size,
        }
    }

    fn report(&self) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self
            .children
            .iter()
            .map(|(name, &bytes)| ReportRow::new(self.root.join(name).display().to_string(), bytes))
            .collect();
        // Files living directly under the root get a catch-all "*" row.
        rows.push(ReportRow::new(
            self.root.join("*").display().to_string(),
            self.direct_files,
        ));
        rows
    }
}
