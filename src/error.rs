//! Error taxonomy: fatal preconditions, fatal traversal I/O, report I/O.
//!
//! Every variant here aborts the whole run; there is no partial-success or
//! retry mode. Matching edge cases (absent paths in containment checks) are
//! not errors at all; they resolve to "no match" inside the matcher.

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("cannot read configuration {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("scan root {} is not an absolute path", .root.display())]
    RootNotAbsolute { root: PathBuf },

    #[error("scan root {} is not an existing directory", .root.display())]
    RootNotDirectory { root: PathBuf },

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
