//! dirtally - bucketed disk-usage reports for a directory tree
//!
//! One depth-first walk feeds every discovered file into a set of configured
//! buckets (exact subtrees, glob patterns, per-child breakdowns); the
//! accumulated totals come out as a single sorted CSV report.

pub mod bucket;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod matcher;
pub mod registry;
pub mod report;
pub mod walker;

pub use bucket::{Bucket, ChildBreakdownBucket, ExactPathBucket, GlobBucket, ReportRow};
pub use config::{Config, LoggingConfig, ScanConfig};
pub use error::TallyError;
pub use format::format_bytes;
pub use registry::BucketRegistry;
pub use report::{build_report, write_csv};
pub use walker::TreeWalker;
