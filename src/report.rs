//! Report assembly and CSV emission.

use std::path::{Path, PathBuf};

use chrono::Local;
use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use crate::bucket::ReportRow;
use crate::error::{Result, TallyError};
use crate::registry::BucketRegistry;

/// CSV header, kept byte-for-byte compatible with the historical reports.
const HEADER: [&str; 3] = ["Repertoire", "taille octet", "taille"];

/// Collect every bucket's rows and sort them by label.
///
/// Sorting is global across all buckets, not per bucket: the emitted report
/// is one lexicographically ordered sequence.
pub fn build_report(registry: &BucketRegistry) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = registry.buckets().flat_map(|b| b.report()).collect();
    rows.sort_by(|a, b| a.label.cmp(&b.label));
    rows
}

/// Report file name for a run starting now: `resultat_<timestamp>.csv`,
/// with microsecond precision so concurrent runs never collide.
pub fn report_file_name() -> String {
    format!("resultat_{}.csv", Local::now().format("%Y%m%d_%H%M%S_%6f"))
}

/// Write the sorted rows into `output_dir`, returning the report path.
///
/// Labels and human-readable sizes are quoted; the byte count is written as
/// a bare integer.
pub fn write_csv(rows: &[ReportRow], output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(report_file_name());
    let report_error = |source: csv::Error| TallyError::Report {
        path: path.clone(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_path(&path)
        .map_err(&report_error)?;

    writer.write_record(HEADER).map_err(&report_error)?;
    for row in rows {
        let bytes = row.bytes.to_string();
        writer
            .write_record([row.label.as_str(), bytes.as_str(), row.human.as_str()])
            .map_err(&report_error)?;
    }
    writer
        .flush()
        .map_err(|source| report_error(source.into()))?;

    info!(report = %path.display(), rows = rows.len(), "report written");
    Ok(path)
}
