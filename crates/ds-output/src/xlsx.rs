//! Excel output backend (feature `xlsx`).
//!
//! Creates a single `schedules.xlsx` workbook in the configured output
//! directory with two worksheets, `Summary` and `Details`, using the same
//! columns as the CSV backend.  Counts, distances and zones are numeric
//! cells; times and labels are text.
//!
//! The workbook is built in memory and saved by [`ReportWriter::finish`].

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::row::{DETAIL_HEADERS, SUMMARY_HEADERS};
use crate::{DetailRow, OutputResult, SummaryRow};
use crate::writer::ReportWriter;

/// Writes the schedule report to a two-sheet Excel workbook.
pub struct XlsxWriter {
    path:        PathBuf,
    summary:     Worksheet,
    details:     Worksheet,
    /// Next free row on each sheet; row 0 holds the headers.
    summary_row: u32,
    details_row: u32,
    finished:    bool,
}

impl XlsxWriter {
    /// Prepare both sheets with their header rows.  Nothing is written to
    /// `dir` until `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summary = Worksheet::new();
        summary.set_name("Summary")?;
        write_headers(&mut summary, &SUMMARY_HEADERS)?;

        let mut details = Worksheet::new();
        details.set_name("Details")?;
        write_headers(&mut details, &DETAIL_HEADERS)?;

        Ok(Self {
            path: dir.join("schedules.xlsx"),
            summary,
            details,
            summary_row: 1,
            details_row: 1,
            finished: false,
        })
    }
}

impl ReportWriter for XlsxWriter {
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        let ws = &mut self.summary;
        for row in rows {
            let r = self.summary_row;
            ws.write_string(r, 0, row.schedule_id.as_str())?;
            ws.write_number(r, 1, row.trip_count as f64)?;
            ws.write_number(r, 2, row.total_km)?;
            ws.write_string(r, 3, &row.start_time.to_string())?;
            ws.write_string(r, 4, &row.end_time.to_string())?;
            self.summary_row += 1;
        }
        Ok(())
    }

    fn write_details(&mut self, rows: &[DetailRow]) -> OutputResult<()> {
        let ws = &mut self.details;
        for row in rows {
            let r = self.details_row;
            ws.write_string(r, 0, row.schedule_id.as_str())?;
            ws.write_number(r, 1, row.trip_order as f64)?;
            ws.write_string(r, 2, row.run_number.as_str())?;
            ws.write_string(r, 3, &row.pickup_time.to_string())?;
            ws.write_number(r, 4, f64::from(row.pickup_zone.0))?;
            ws.write_number(r, 5, f64::from(row.dropoff_zone.0))?;
            ws.write_string(r, 6, &row.dropoff_time.to_string())?;
            ws.write_number(r, 7, row.trip_km)?;
            ws.write_number(r, 8, row.schedule_total_km)?;
            ws.write_string(r, 9, row.justification.as_str())?;
            self.details_row += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut workbook = Workbook::new();
        workbook.push_worksheet(std::mem::replace(&mut self.summary, Worksheet::new()));
        workbook.push_worksheet(std::mem::replace(&mut self.details, Worksheet::new()));
        workbook.save(&self.path)?;
        Ok(())
    }
}

fn write_headers(ws: &mut Worksheet, headers: &[&str]) -> OutputResult<()> {
    for (col, &h) in (0u16..).zip(headers) {
        ws.write_string(0, col, h)?;
    }
    Ok(())
}
