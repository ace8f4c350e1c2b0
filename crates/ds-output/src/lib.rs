//! `ds-output` — schedule reports and their writers.
//!
//! Two report tables are derived from a finished run:
//!
//! | Table     | One row per | Built by                  |
//! |-----------|-------------|---------------------------|
//! | summary   | schedule    | [`build_summary`]         |
//! | details   | trip        | [`build_details`]         |
//!
//! Three backends write them, behind Cargo features:
//!
//! | Feature   | Backend     | Files created                     |
//! |-----------|-------------|-----------------------------------|
//! | *(none)*  | CSV         | `summary.csv`, `details.csv`      |
//! | `sqlite`  | SQLite      | `schedules.db`                    |
//! | `xlsx`    | Excel       | `schedules.xlsx` (two sheets)     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ds_output::{build_details, build_summary, write_report, CsvWriter};
//!
//! let summary = build_summary(&trips, &schedules);
//! let details = build_details(&trips, &schedules, &graph, &scheduler, snow_mode);
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_report(&mut writer, &summary, &details)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "xlsx")]
pub mod xlsx;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::{build_details, build_summary};
pub use row::{DetailRow, SummaryRow};
pub use writer::{write_report, ReportWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "xlsx")]
pub use xlsx::XlsxWriter;
