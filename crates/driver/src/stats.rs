//! Score file output: one CSV line per finished pairing, plus an optional JSONL report.
//!
//! Each line is flushed as soon as its pairing finishes so a crashed batch
//! still leaves the completed results on disk.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::runner::MatchReport;

pub struct StatsWriter {
    stats: BufWriter<File>,
    report: Option<BufWriter<File>>,
}

impl StatsWriter {
    /// Create (truncating) the stats file and, if requested, the report file.
    pub fn create(stats_path: &Path, report_path: Option<&Path>) -> io::Result<Self> {
        let stats = BufWriter::new(create_file(stats_path)?);
        let report = report_path.map(create_file).transpose()?.map(BufWriter::new);
        Ok(Self { stats, report })
    }

    pub fn record(&mut self, report: &MatchReport) -> io::Result<()> {
        writeln!(self.stats, "{}", stats_line(report))?;
        self.stats.flush()?;

        if let Some(writer) = self.report.as_mut() {
            let json = serde_json::to_string(report).map_err(io::Error::other)?;
            writeln!(writer, "{json}")?;
            writer.flush()?;
        }
        Ok(())
    }
}

fn create_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// `architect,solver,size,seed,score,inverse_score`
pub fn stats_line(report: &MatchReport) -> String {
    format!(
        "{},{},{},{},{:.6},{:.6}",
        report.architect,
        report.solver,
        report.size,
        report.seed,
        report.score,
        report.inverse_score()
    )
}
