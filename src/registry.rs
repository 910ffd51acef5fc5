//! Insertion-ordered collection of named buckets built from configuration.

use std::path::Path;

use crate::bucket::{Bucket, ChildBreakdownBucket, ExactPathBucket, GlobBucket};
use crate::config::ScanConfig;
use crate::matcher::resolve_lenient;

/// Named buckets in configuration order.
///
/// Keys are unique: re-registering a key replaces the earlier bucket without
/// changing its position, so duplicated configuration values resolve to a
/// single bucket (last one wins) and never double-count.
#[derive(Debug, Default)]
pub struct BucketRegistry {
    buckets: Vec<(String, Box<dyn Bucket>)>,
}

impl BucketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry a run uses: the implicit bucket for the scan root
    /// itself, then extra exact roots, glob patterns, and breakdown roots.
    ///
    /// Exact and breakdown roots are resolved at build time; globs and the
    /// implicit root keep their configured spelling as the registry key.
    pub fn from_config(config: &ScanConfig) -> Self {
        let mut registry = Self::new();

        registry.insert(
            config.root.display().to_string(),
            Box::new(ExactPathBucket::new(config.resolved_root())),
        );
        for raw in config.extra_roots() {
            let resolved = resolve_lenient(Path::new(&raw));
            let key = resolved.display().to_string();
            registry.insert(key, Box::new(ExactPathBucket::new(resolved)));
        }
        for pattern in config.globs() {
            registry.insert(pattern.clone(), Box::new(GlobBucket::new(pattern)));
        }
        for raw in config.breakdown_roots() {
            let resolved = resolve_lenient(Path::new(&raw));
            registry.insert(raw, Box::new(ChildBreakdownBucket::new(resolved)));
        }

        registry
    }

    /// Register a bucket under `key`, replacing any earlier bucket with the
    /// same key in place.
    pub fn insert(&mut self, key: String, bucket: Box<dyn Bucket>) {
        match self.buckets.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = bucket,
            None => self.buckets.push((key, bucket)),
        }
    }

    /// Offer one discovered file to every bucket, in registration order.
    pub fn accumulate(&mut self, path: &Path, size: u64) {
        for (_, bucket) in &mut self.buckets {
            bucket.accumulate(path, size);
        }
    }

    /// Iterate buckets in registration order.
    pub fn buckets(&self) -> impl Iterator<Item = &dyn Bucket> {
        self.buckets.iter().map(|(_, bucket)| bucket.as_ref())
    }

    /// Registered keys, in order. Mostly useful for diagnostics and tests.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
