//! TOML configuration: scan targets, report destination, log sink.
//!
//! List-valued settings are comma-separated strings, kept compatible with
//! the historical configuration files this tool replaces.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TallyError};
use crate::matcher::resolve_lenient;

/// Whole configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}

/// What to scan and where the report goes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directory of the walk. Must be an absolute, existing directory.
    pub root: PathBuf,
    /// Comma-separated extra directories reported as exact-path buckets.
    pub extra_roots: String,
    /// Comma-separated glob patterns reported as pattern buckets.
    pub globs: String,
    /// Comma-separated directories reported with per-child breakdowns.
    pub breakdown_roots: String,
    /// Directory the CSV report is written into. Defaults to the current
    /// directory when unset.
    pub output_dir: PathBuf,
}

/// Log destination and verbosity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path; logs go to stderr when unset.
    pub file: Option<PathBuf>,
    /// DEBUG, INFO, WARN or ERROR. Anything else silently means INFO.
    pub level: String,
}

impl Config {
    /// Read and parse `path`. Scan preconditions are checked separately by
    /// [`ScanConfig::validate`], once the log sink is up.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| TallyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| TallyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ScanConfig {
    /// Fatal precondition: the scan root must be an absolute path naming an
    /// existing directory. Checked before any traversal starts.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_absolute() {
            return Err(TallyError::RootNotAbsolute {
                root: self.root.clone(),
            });
        }
        if !self.root.is_dir() {
            return Err(TallyError::RootNotDirectory {
                root: self.root.clone(),
            });
        }
        Ok(())
    }

    /// The scan root with symlinks resolved; the walk starts here so that
    /// discovered paths share a canonical prefix with resolved bucket roots.
    pub fn resolved_root(&self) -> PathBuf {
        resolve_lenient(&self.root)
    }

    pub fn extra_roots(&self) -> Vec<String> {
        split_list(&self.extra_roots)
    }

    pub fn globs(&self) -> Vec<String> {
        split_list(&self.globs)
    }

    pub fn breakdown_roots(&self) -> Vec<String> {
        split_list(&self.breakdown_roots)
    }

    pub fn output_dir(&self) -> &Path {
        if self.output_dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.output_dir
        }
    }
}

/// Split a comma-separated configuration value, dropping empty segments.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
