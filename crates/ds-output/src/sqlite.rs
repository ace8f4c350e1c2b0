//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `schedules.db` file in the configured output directory
//! with two tables: `summary` and `details`.

use std::path::Path;

use rusqlite::Connection;

use crate::{DetailRow, OutputResult, SummaryRow};
use crate::writer::ReportWriter;

/// Writes the schedule report to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `schedules.db` in `dir` and initialise the schema.
    ///
    /// Existing report tables are dropped, so each run replaces the last.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("schedules.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS summary;
             DROP TABLE IF EXISTS details;
             CREATE TABLE summary (
                 schedule_id TEXT PRIMARY KEY,
                 trip_count  INTEGER NOT NULL,
                 total_km    REAL    NOT NULL,
                 start_time  TEXT    NOT NULL,
                 end_time    TEXT    NOT NULL
             );
             CREATE TABLE details (
                 schedule_id       TEXT    NOT NULL,
                 trip_order        INTEGER NOT NULL,
                 run_number        TEXT    NOT NULL,
                 pickup_time       TEXT    NOT NULL,
                 pickup_zone       INTEGER NOT NULL,
                 dropoff_zone      INTEGER NOT NULL,
                 dropoff_time      TEXT    NOT NULL,
                 trip_km           REAL    NOT NULL,
                 schedule_total_km REAL    NOT NULL,
                 justification     TEXT    NOT NULL,
                 PRIMARY KEY (schedule_id, trip_order)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteWriter {
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO summary \
                 (schedule_id, trip_count, total_km, start_time, end_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.schedule_id,
                    row.trip_count as i64,
                    row.total_km,
                    row.start_time.to_string(),
                    row.end_time.to_string(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_details(&mut self, rows: &[DetailRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO details \
                 (schedule_id, trip_order, run_number, pickup_time, pickup_zone, \
                  dropoff_zone, dropoff_time, trip_km, schedule_total_km, justification) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.schedule_id,
                    row.trip_order as i64,
                    row.run_number,
                    row.pickup_time.to_string(),
                    row.pickup_zone.0,
                    row.dropoff_zone.0,
                    row.dropoff_time.to_string(),
                    row.trip_km,
                    row.schedule_total_km,
                    row.justification,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
