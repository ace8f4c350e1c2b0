//! Zone table loader.
//!
//! # CSV format
//!
//! One row per primary zone.  `Backup Zones` is an optional comma-separated
//! list of zones reachable from the primary in one hop.  Other columns are
//! ignored.
//!
//! ```csv
//! Primary Zone,Backup Zones
//! 1,"2, 3"
//! 2,4
//! 5,
//! ```
//!
//! The same two columns are read from the first worksheet of a spreadsheet
//! (feature `xlsx`).  [`load_zones`] picks the format from the extension:
//! `.csv` is CSV, anything else is opened as a workbook.
//!
//! Each row registers the primary as its own neighbour and links it to every
//! backup in both directions.
//!
//! # Malformed input
//!
//! Rows are never fatal.  A row with an empty or non-integer primary zone is
//! skipped whole; a backup token that is not all ASCII digits is skipped on
//! its own and the rest of the row still applies.  A spreadsheet round-trip
//! can turn `12` into `12.0`, so integral floats are accepted for the primary
//! column.

use std::io::Read;
use std::path::Path;

use log::debug;

use ds_core::ZoneId;

use crate::{ZoneError, ZoneGraph, ZoneGraphBuilder, ZoneResult};

const PRIMARY_COLUMN: &str = "Primary Zone";
const BACKUP_COLUMN: &str = "Backup Zones";

// ── Row type ──────────────────────────────────────────────────────────────────

/// One raw zone-table row, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneRow {
    pub primary: Option<String>,
    pub backups: Option<String>,
}

impl ZoneRow {
    pub fn new(primary: impl Into<String>, backups: impl Into<String>) -> Self {
        Self { primary: Some(primary.into()), backups: Some(backups.into()) }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Build a [`ZoneGraph`] from raw rows, skipping malformed rows and tokens.
pub fn build_graph<I>(rows: I) -> ZoneGraph
where
    I: IntoIterator<Item = ZoneRow>,
{
    let mut builder = ZoneGraphBuilder::new();

    for (i, row) in rows.into_iter().enumerate() {
        let Some(primary) = row.primary.as_deref().and_then(parse_primary) else {
            debug!("zone row {i}: skipping, unusable primary zone {:?}", row.primary);
            continue;
        };
        builder.add_zone(primary);

        let Some(raw) = row.backups.as_deref() else { continue };
        for token in raw.split(',') {
            match parse_backup(token) {
                Some(backup) => builder.add_link(primary, backup),
                None if token.trim().is_empty() => {}
                None => debug!("zone row {i}: skipping backup token {token:?}"),
            }
        }
    }

    builder.build()
}

/// Load the zone graph from `path`, choosing CSV or spreadsheet by extension.
pub fn load_zones(path: &Path) -> ZoneResult<ZoneGraph> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        return load_zones_csv(path);
    }

    #[cfg(feature = "xlsx")]
    {
        load_zones_xlsx(path)
    }
    #[cfg(not(feature = "xlsx"))]
    {
        Err(ZoneError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Load the zone graph from a CSV file.
pub fn load_zones_csv(path: &Path) -> ZoneResult<ZoneGraph> {
    let file = std::fs::File::open(path).map_err(ZoneError::Io)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
pub fn load_zones_reader<R: Read>(reader: R) -> ZoneResult<ZoneGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let primary_idx = headers
        .iter()
        .position(|h| h == PRIMARY_COLUMN)
        .ok_or(ZoneError::MissingColumn(PRIMARY_COLUMN))?;
    let backup_idx = headers.iter().position(|h| h == BACKUP_COLUMN);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(ZoneRow {
            primary: record.get(primary_idx).map(str::to_owned),
            backups: backup_idx.and_then(|i| record.get(i)).map(str::to_owned),
        });
    }

    Ok(build_graph(rows))
}

/// Load the zone graph from the first worksheet of a spreadsheet.
///
/// Header matching and row handling are the same as for CSV.  Numeric cells
/// are read as their plain decimal text, so `4.0` in a backup cell links
/// zone 4.
#[cfg(feature = "xlsx")]
pub fn load_zones_xlsx(path: &Path) -> ZoneResult<ZoneGraph> {
    use calamine::{open_workbook_auto, Reader};

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ZoneError::MissingColumn(PRIMARY_COLUMN))??;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = sheet_rows
        .next()
        .map(|row| row.iter().map(|c| cell_text(c).unwrap_or_default()).collect())
        .unwrap_or_default();
    let primary_idx = headers
        .iter()
        .position(|h| h == PRIMARY_COLUMN)
        .ok_or(ZoneError::MissingColumn(PRIMARY_COLUMN))?;
    let backup_idx = headers.iter().position(|h| h == BACKUP_COLUMN);

    let rows: Vec<ZoneRow> = sheet_rows
        .map(|row| ZoneRow {
            primary: row.get(primary_idx).and_then(cell_text),
            backups: backup_idx.and_then(|i| row.get(i)).and_then(cell_text),
        })
        .collect();

    Ok(build_graph(rows))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[cfg(feature = "xlsx")]
fn cell_text(cell: &calamine::Data) -> Option<String> {
    use calamine::Data;

    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.trim().to_owned()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        other => Some(other.to_string()),
    }
}

fn parse_primary(raw: &str) -> Option<ZoneId> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<u32>() {
        return Some(ZoneId(n));
    }
    let f: f64 = s.parse().ok()?;
    if f.is_finite() && f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) {
        Some(ZoneId(f as u32))
    } else {
        None
    }
}

fn parse_backup(token: &str) -> Option<ZoneId> {
    let s = token.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().map(ZoneId)
}
