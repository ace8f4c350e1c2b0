//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `summary.csv`
//! - `details.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{DETAIL_HEADERS, SUMMARY_HEADERS};
use crate::{DetailRow, OutputResult, SummaryRow};
use crate::writer::ReportWriter;

/// Writes the schedule report to two CSV files.
pub struct CsvWriter {
    summary:  Writer<File>,
    details:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(SUMMARY_HEADERS)?;

        let mut details = Writer::from_path(dir.join("details.csv"))?;
        details.write_record(DETAIL_HEADERS)?;

        Ok(Self {
            summary,
            details,
            finished: false,
        })
    }
}

impl ReportWriter for CsvWriter {
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record(&[
                row.schedule_id.clone(),
                row.trip_count.to_string(),
                row.total_km.to_string(),
                row.start_time.to_string(),
                row.end_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_details(&mut self, rows: &[DetailRow]) -> OutputResult<()> {
        for row in rows {
            self.details.write_record(&[
                row.schedule_id.clone(),
                row.trip_order.to_string(),
                row.run_number.clone(),
                row.pickup_time.to_string(),
                row.pickup_zone.0.to_string(),
                row.dropoff_zone.0.to_string(),
                row.dropoff_time.to_string(),
                row.trip_km.to_string(),
                row.schedule_total_km.to_string(),
                row.justification.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summary.flush()?;
        self.details.flush()?;
        Ok(())
    }
}
