//! Integration tests for ds-output.

use ds_core::{GapRng, SchedulerConfig, TimeOfDay, ZoneId};
use ds_schedule::{Schedule, Scheduler, Trip, TripSet};
use ds_zone::{ZoneGraph, ZoneGraphBuilder};

use crate::row::{DetailRow, SummaryRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

fn trip(run: &str, pz: u32, dz: u32, pickup: &str, dropoff: &str, km: f64) -> Trip {
    Trip::new(run, ZoneId(pz), ZoneId(dz), t(pickup), t(dropoff), km)
}

fn two_zone_graph() -> ZoneGraph {
    let mut b = ZoneGraphBuilder::new();
    b.add_zone(ZoneId(1));
    b.add_zone(ZoneId(2));
    b.add_link(ZoneId(1), ZoneId(2));
    b.build()
}

/// A and B chain to 90 km; C would overshoot and opens a second schedule.
fn abc_trips() -> TripSet {
    TripSet::new(vec![
        trip("A", 1, 1, "08:00:00", "08:30:00", 50.0),
        trip("B", 1, 2, "08:45:00", "09:15:00", 40.0),
        trip("C", 2, 2, "09:30:00", "10:00:00", 40.0),
    ])
}

struct LowDraw;

impl GapRng for LowDraw {
    fn draw_minutes(&mut self, lo: u32, _hi: u32) -> u32 {
        lo
    }
}

fn run(snow_mode: bool) -> (TripSet, ZoneGraph, Scheduler, Vec<Schedule>) {
    let trips = abc_trips();
    let graph = two_zone_graph();
    let scheduler = Scheduler::new(SchedulerConfig::default()).unwrap();
    let schedules = scheduler.build_schedules(&trips, &graph, snow_mode, &mut LowDraw);
    (trips, graph, scheduler, schedules)
}

fn summary_row(id: &str) -> SummaryRow {
    SummaryRow {
        schedule_id: id.to_owned(),
        trip_count:  2,
        total_km:    90.0,
        start_time:  TimeOfDay::hms(8, 0, 0),
        end_time:    TimeOfDay::hms(9, 15, 0),
    }
}

fn detail_row(id: &str, order: usize) -> DetailRow {
    DetailRow {
        schedule_id:       id.to_owned(),
        trip_order:        order,
        run_number:        format!("R{order}"),
        pickup_time:       TimeOfDay::hms(8, 0, 0),
        pickup_zone:       ZoneId(3),
        dropoff_zone:      ZoneId(7),
        dropoff_time:      TimeOfDay::hms(8, 30, 0),
        trip_km:           12.5,
        schedule_total_km: 12.5 * order as f64,
        justification:     "First trip".to_owned(),
    }
}

// ── Report derivation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use ds_core::{ScheduleId, TripId};
    use ds_schedule::{CloseReason, Link};

    use super::*;
    use crate::report::{build_details, build_summary};

    #[test]
    fn summary_aggregates_each_schedule() {
        let (trips, _, _, schedules) = run(false);
        let rows = build_summary(&trips, &schedules);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], summary_row("SCH-001"));
        assert_eq!(rows[1].schedule_id, "SCH-002");
        assert_eq!(rows[1].trip_count, 1);
        assert_eq!(rows[1].total_km, 40.0);
        assert_eq!(rows[1].start_time, t("09:30:00"));
        assert_eq!(rows[1].end_time, t("10:00:00"));
    }

    #[test]
    fn detail_rows_follow_chaining_order() {
        let (trips, graph, scheduler, schedules) = run(false);
        let rows = build_details(&trips, &schedules, &graph, &scheduler, false);

        let runs: Vec<_> = rows.iter().map(|r| r.run_number.as_str()).collect();
        assert_eq!(runs, ["A", "B", "C"]);
        let orders: Vec<_> = rows.iter().map(|r| r.trip_order).collect();
        assert_eq!(orders, [1, 2, 1]);
        let totals: Vec<_> = rows.iter().map(|r| r.schedule_total_km).collect();
        assert_eq!(totals, [50.0, 90.0, 40.0]);
    }

    #[test]
    fn justification_for_fixed_gap() {
        let (trips, graph, scheduler, schedules) = run(false);
        let rows = build_details(&trips, &schedules, &graph, &scheduler, false);

        assert_eq!(rows[0].justification, "First trip");
        assert_eq!(rows[1].justification, "15 min gap · dist 0 · 10 min");
        assert_eq!(rows[2].justification, "First trip");
    }

    #[test]
    fn justification_for_snow_gap_shows_range() {
        let (trips, graph, scheduler, schedules) = run(true);
        let rows = build_details(&trips, &schedules, &graph, &scheduler, true);

        assert_eq!(rows[1].run_number, "B");
        assert_eq!(rows[1].justification, "15 min gap · dist 0 · 10–15 min (snow)");
    }

    #[test]
    fn justification_for_unreachable_pair() {
        let trips = TripSet::new(vec![
            trip("X", 1, 1, "08:00:00", "08:30:00", 5.0),
            trip("Y", 9, 9, "09:00:00", "09:20:00", 5.0),
        ]);
        let schedules = vec![Schedule {
            id:           ScheduleId(1),
            label:        "SCH-001".to_owned(),
            trips:        vec![TripId(0), TripId(1)],
            links:        vec![Link { hop: 0, gap_minutes: 10 }],
            total_km:     10.0,
            close_reason: CloseReason::NoCandidate,
        }];
        let scheduler = Scheduler::new(SchedulerConfig::default()).unwrap();
        let rows = build_details(&trips, &schedules, &two_zone_graph(), &scheduler, false);

        assert_eq!(rows[1].justification, "30 min gap · dist unreachable");
    }

    #[test]
    fn distances_rounded_to_three_places() {
        let trips = TripSet::new(vec![trip("R", 1, 1, "08:00:00", "08:30:00", 1.234_56)]);
        let graph = two_zone_graph();
        let scheduler = Scheduler::new(SchedulerConfig::default()).unwrap();
        let schedules = scheduler.build_schedules(&trips, &graph, false, &mut LowDraw);

        let summary = build_summary(&trips, &schedules);
        let details = build_details(&trips, &schedules, &graph, &scheduler, false);
        assert_eq!(summary[0].total_km, 1.235);
        assert_eq!(details[0].trip_km, 1.235);
        assert_eq!(details[0].schedule_total_km, 1.235);
    }

    #[test]
    fn empty_run_gives_empty_report() {
        let trips = TripSet::new(Vec::new());
        let graph = ZoneGraph::empty();
        let scheduler = Scheduler::new(SchedulerConfig::default()).unwrap();
        let schedules = scheduler.build_schedules(&trips, &graph, false, &mut LowDraw);

        assert!(build_summary(&trips, &schedules).is_empty());
        assert!(build_details(&trips, &schedules, &graph, &scheduler, false).is_empty());
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::{write_report, ReportWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("summary.csv").exists());
        assert!(dir.path().join("details.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("summary.csv")),
            ["Schedule_ID", "Trip_Count", "Total_KM", "Start_Time", "End_Time"],
        );
        assert_eq!(
            headers(&dir.path().join("details.csv")),
            [
                "Schedule_ID",
                "Trip Order",
                "Run Number",
                "Pickup Time",
                "Pick Zone",
                "Dropoff Zone",
                "Dropoff Time",
                "Trip KM",
                "Schedule Total KM",
                "Linkage Justification",
            ],
        );
    }

    #[test]
    fn csv_summary_values() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&[summary_row("SCH-001"), summary_row("SCH-002")]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "SCH-001");
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[0][2], "90");
        assert_eq!(&rows[0][3], "08:00");
        assert_eq!(&rows[0][4], "09:15");
    }

    #[test]
    fn csv_detail_values() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_details(&[detail_row("SCH-001", 1)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("details.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "R1");
        assert_eq!(&rows[0][4], "3");
        assert_eq!(&rows[0][5], "7");
        assert_eq!(&rows[0][7], "12.5");
        assert_eq!(&rows[0][9], "First trip");
    }

    #[test]
    fn csv_full_report() {
        let (trips, graph, scheduler, schedules) = run(false);
        let summary = crate::build_summary(&trips, &schedules);
        let details = crate::build_details(&trips, &schedules, &graph, &scheduler, false);

        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        write_report(&mut w, &summary, &details).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("details.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), trips.len());
        assert_eq!(&rows[1][9], "15 min gap · dist 0 · 10 min");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::ReportWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("schedules.db").exists());
    }

    #[test]
    fn sqlite_summary_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&[summary_row("SCH-001"), summary_row("SCH-002")]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("schedules.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM summary", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn sqlite_detail_values() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_details(&[detail_row("SCH-001", 1), detail_row("SCH-001", 2)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("schedules.db")).unwrap();
        let (zone, total, pickup): (i64, f64, String) = conn.query_row(
            "SELECT pickup_zone, schedule_total_km, pickup_time FROM details WHERE trip_order = 2",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(zone, 3);
        assert_eq!(total, 25.0);
        assert_eq!(pickup, "08:00");
    }

    #[test]
    fn sqlite_reopen_replaces_tables() {
        let dir = tmp();
        {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            w.write_summary(&[summary_row("SCH-001")]).unwrap();
            w.finish().unwrap();
        }
        {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            w.write_summary(&[summary_row("SCH-001")]).unwrap();
            w.finish().unwrap();
        }

        let conn = rusqlite::Connection::open(dir.path().join("schedules.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM summary", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Excel tests ───────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "xlsx"))]
mod xlsx_tests {
    use calamine::{open_workbook_auto, Data, Reader};
    use tempfile::TempDir;

    use super::*;
    use crate::row::{DETAIL_HEADERS, SUMMARY_HEADERS};
    use crate::writer::{write_report, ReportWriter};
    use crate::xlsx::XlsxWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_owned())
    }

    #[test]
    fn nothing_written_before_finish() {
        let dir = tmp();
        let mut w = XlsxWriter::new(dir.path()).unwrap();
        assert!(!dir.path().join("schedules.xlsx").exists());
        w.finish().unwrap();
        assert!(dir.path().join("schedules.xlsx").exists());
    }

    #[test]
    fn xlsx_has_summary_and_details_sheets() {
        let dir = tmp();
        let mut w = XlsxWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut wb = open_workbook_auto(dir.path().join("schedules.xlsx")).unwrap();
        assert_eq!(wb.sheet_names(), ["Summary", "Details"]);

        let summary = wb.worksheet_range_at(0).unwrap().unwrap();
        let headers: Vec<Data> = SUMMARY_HEADERS.iter().map(|h| text(h)).collect();
        assert_eq!(summary.rows().next().unwrap(), headers.as_slice());

        let details = wb.worksheet_range_at(1).unwrap().unwrap();
        let headers: Vec<Data> = DETAIL_HEADERS.iter().map(|h| text(h)).collect();
        assert_eq!(details.rows().next().unwrap(), headers.as_slice());
    }

    #[test]
    fn xlsx_full_report() {
        let (trips, graph, scheduler, schedules) = run(false);
        let summary = crate::build_summary(&trips, &schedules);
        let details = crate::build_details(&trips, &schedules, &graph, &scheduler, false);

        let dir = tmp();
        let mut w = XlsxWriter::new(dir.path()).unwrap();
        write_report(&mut w, &summary, &details).unwrap();

        let mut wb = open_workbook_auto(dir.path().join("schedules.xlsx")).unwrap();
        let sheet = wb.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(sheet.height(), 1 + summary.len());
        assert_eq!(sheet.get((1, 0)), Some(&text("SCH-001")));
        assert_eq!(sheet.get((1, 1)), Some(&Data::Float(2.0)));
        assert_eq!(sheet.get((1, 2)), Some(&Data::Float(90.0)));
        assert_eq!(sheet.get((1, 3)), Some(&text("08:00")));

        let sheet = wb.worksheet_range_at(1).unwrap().unwrap();
        assert_eq!(sheet.height(), 1 + trips.len());
        assert_eq!(sheet.get((2, 2)), Some(&text("B")));
        assert_eq!(sheet.get((2, 4)), Some(&Data::Float(1.0)));
        assert_eq!(sheet.get((2, 5)), Some(&Data::Float(2.0)));
        assert_eq!(sheet.get((2, 9)), Some(&text("15 min gap · dist 0 · 10 min")));
    }

    #[test]
    fn xlsx_rows_append_across_calls() {
        let dir = tmp();
        let mut w = XlsxWriter::new(dir.path()).unwrap();
        w.write_details(&[detail_row("SCH-001", 1)]).unwrap();
        w.write_details(&[detail_row("SCH-001", 2)]).unwrap();
        w.finish().unwrap();

        let mut wb = open_workbook_auto(dir.path().join("schedules.xlsx")).unwrap();
        let sheet = wb.worksheet_range_at(1).unwrap().unwrap();
        assert_eq!(sheet.height(), 3);
        assert_eq!(sheet.get((2, 1)), Some(&Data::Float(2.0)));
        assert_eq!(sheet.get((2, 8)), Some(&Data::Float(25.0)));
    }

    #[test]
    fn xlsx_finish_idempotent() {
        let dir = tmp();
        let mut w = XlsxWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
