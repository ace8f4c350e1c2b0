//! The `ReportWriter` trait implemented by all backend writers.

use crate::{DetailRow, OutputResult, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait ReportWriter {
    /// Write the per-schedule summary table.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Write the per-trip detail table.
    fn write_details(&mut self, rows: &[DetailRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write both tables and finish the writer.
pub fn write_report<W: ReportWriter + ?Sized>(
    writer:  &mut W,
    summary: &[SummaryRow],
    details: &[DetailRow],
) -> OutputResult<()> {
    writer.write_summary(summary)?;
    writer.write_details(details)?;
    writer.finish()
}
