//! Integration tests for fleet-output.

use fleet_core::{Alert, AlertKind, Severity, TelemetrySnapshot, VehicleRecord};

fn snapshot(plate: &str, unix_time_ms: i64) -> TelemetrySnapshot {
    TelemetrySnapshot {
        vehicle:      plate.into(),
        latitude:     -26.2,
        longitude:    28.04,
        speed:        87.5,
        fuel_level:   62.0,
        engine_temp:  88.0,
        unix_time_ms,
    }
}

fn record(plate: &str, fuel_level: f64) -> VehicleRecord {
    VehicleRecord {
        vehicle:         plate.into(),
        latitude:        -26.2,
        longitude:       28.04,
        speed:           40.0,
        fuel_level,
        engine_temp:     85.0,
        updated_unix_ms: 1_000,
    }
}

fn alert(plate: &str) -> Alert {
    Alert {
        vehicle:      plate.into(),
        kind:         AlertKind::Overspeed,
        severity:     Severity::Critical,
        message:      format!("Vehicle {plate} speeding at 150.0 km/h"),
        unix_time_ms: 2_000,
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use fleet_sim::PersistenceSink;

    use super::*;
    use crate::csv::CsvStore;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn files_created() {
        let dir = tmp();
        let _store = CsvStore::new(dir.path()).unwrap();
        assert!(dir.path().join("telemetry.csv").exists());
        assert!(dir.path().join("alerts.csv").exists());
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut store = CsvStore::new(dir.path()).unwrap();
        store.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("telemetry.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["vehicle", "latitude", "longitude", "speed", "fuel_level", "engine_temp", "unix_time_ms"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("alerts.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["vehicle", "kind", "severity", "message", "unix_time_ms"]);
    }

    #[test]
    fn telemetry_rows_appended() {
        let dir = tmp();
        let mut store = CsvStore::new(dir.path()).unwrap();
        store
            .append_telemetry(&[snapshot("GP 123 ABC", 0), snapshot("WC 456 DEF", 0)])
            .unwrap();
        store.append_telemetry(&[snapshot("GP 123 ABC", 1_000)]).unwrap();
        store.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("telemetry.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "GP 123 ABC");
        assert_eq!(&rows[1][0], "WC 456 DEF");
        assert_eq!(&rows[2][6], "1000");
    }

    #[test]
    fn alert_rows_use_wire_names() {
        let dir = tmp();
        let mut store = CsvStore::new(dir.path()).unwrap();
        store.append_alerts(&[alert("GP 123 ABC")]).unwrap();
        store.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("alerts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "OVERSPEED");
        assert_eq!(&rows[0][2], "CRITICAL");
        assert_eq!(&rows[0][3], "Vehicle GP 123 ABC speeding at 150.0 km/h");
    }

    #[test]
    fn no_vehicle_table() {
        let dir = tmp();
        let mut store = CsvStore::new(dir.path()).unwrap();
        store.upsert_vehicles(&[record("GP 123 ABC", 50.0)]).unwrap();
        assert!(store.load_vehicles().unwrap().is_empty());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use fleet_sim::PersistenceSink;

    use super::*;
    use crate::sqlite::SqliteStore;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn db_created() {
        let dir = tmp();
        let _store = SqliteStore::new(dir.path()).unwrap();
        assert!(dir.path().join("fleet.db").exists());
    }

    #[test]
    fn upsert_overwrites_by_plate() {
        let dir = tmp();
        let mut store = SqliteStore::new(dir.path()).unwrap();
        store.upsert_vehicles(&[record("GP 123 ABC", 50.0)]).unwrap();
        store.upsert_vehicles(&[record("GP 123 ABC", 30.0)]).unwrap();
        store.flush().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("fleet.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM vehicles", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
        let fuel: f64 = conn
            .query_row("SELECT fuel_level FROM vehicles WHERE vehicle = 'GP 123 ABC'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(fuel, 30.0);
    }

    #[test]
    fn load_vehicles_round_trip() {
        let dir = tmp();
        let mut store = SqliteStore::new(dir.path()).unwrap();
        let records = vec![record("GP 123 ABC", 50.0), record("WC 456 DEF", 80.0)];
        store.upsert_vehicles(&records).unwrap();

        let mut loaded = store.load_vehicles().unwrap();
        loaded.sort_by(|a, b| a.vehicle.cmp(&b.vehicle));
        assert_eq!(loaded, records);
    }

    #[test]
    fn telemetry_appends() {
        let dir = tmp();
        let mut store = SqliteStore::new(dir.path()).unwrap();
        store
            .append_telemetry(&[snapshot("GP 123 ABC", 0), snapshot("GP 123 ABC", 1_000)])
            .unwrap();
        store.flush().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("fleet.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM telemetry", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn alerts_store_wire_names() {
        let dir = tmp();
        let mut store = SqliteStore::new(dir.path()).unwrap();
        store.append_alerts(&[alert("GP 123 ABC")]).unwrap();
        store.flush().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("fleet.db")).unwrap();
        let (kind, severity): (String, String) = conn
            .query_row("SELECT kind, severity FROM alerts", [], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap();
        assert_eq!(kind, "OVERSPEED");
        assert_eq!(severity, "CRITICAL");
    }

    #[test]
    fn empty_batches_ok() {
        let dir = tmp();
        let mut store = SqliteStore::new(dir.path()).unwrap();
        store.upsert_vehicles(&[]).unwrap();
        store.append_telemetry(&[]).unwrap();
        store.append_alerts(&[]).unwrap();
    }
}

// ── JSON feed tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod feed_tests {
    use fleet_sim::BroadcastSink;
    use serde_json::Value;

    use super::*;
    use crate::feed::JsonFeed;

    fn lines(feed: JsonFeed<Vec<u8>>) -> Vec<Value> {
        let bytes = feed.into_inner();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn telemetry_envelope() {
        let feed = JsonFeed::new(Vec::new());
        feed.telemetry_batch(&[snapshot("GP 123 ABC", 0), snapshot("WC 456 DEF", 0)])
            .unwrap();

        let lines = lines(feed);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["topic"], "vehicles");
        assert_eq!(lines[0]["data"].as_array().unwrap().len(), 2);
        assert_eq!(lines[0]["data"][0]["vehicle"], "GP 123 ABC");
    }

    #[test]
    fn alert_envelope() {
        let feed = JsonFeed::new(Vec::new());
        feed.alert(&alert("GP 123 ABC")).unwrap();

        let lines = lines(feed);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["topic"], "alerts");
        assert_eq!(lines[0]["data"]["kind"], "OVERSPEED");
        assert_eq!(lines[0]["data"]["severity"], "CRITICAL");
    }

    #[test]
    fn alerts_toggle() {
        let feed = JsonFeed::new(Vec::new());
        assert!(feed.alerts_enabled());
        feed.set_alerts_enabled(false);
        assert!(!feed.alerts_enabled());
        feed.set_alerts_enabled(true);
        assert!(feed.alerts_enabled());
    }
}

// ── End-to-end through the orchestrator ───────────────────────────────────────

#[cfg(test)]
mod integration {
    use tempfile::TempDir;

    use fleet_core::SimConfig;
    use fleet_sim::{NoopObserver, SimBuilder};

    use crate::csv::CsvStore;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_backed_run() {
        let dir = tmp();
        let store = CsvStore::new(dir.path()).unwrap();

        let config = SimConfig {
            vehicle_count: 4,
            start_unix_ms: Some(0),
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config).persistence(store).build().unwrap();
        sim.run_ticks(3, &mut NoopObserver);
        drop(sim); // flushes the buffered CSV writers

        let mut rdr = csv::Reader::from_path(dir.path().join("telemetry.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12, "expected 3 ticks × 4 vehicles = 12 telemetry rows");
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn sqlite_backed_runs_rehydrate() {
        use crate::sqlite::SqliteStore;

        let dir = tmp();
        let config = SimConfig {
            vehicle_count: 4,
            start_unix_ms: Some(0),
            ..SimConfig::default()
        };

        let store = SqliteStore::new(dir.path()).unwrap();
        let mut sim = SimBuilder::new(config.clone()).persistence(store).build().unwrap();
        sim.run_ticks(2, &mut NoopObserver);
        let mut first = sim.registry.ids();
        first.sort();

        // A second run against the same database picks up the same plates.
        let store = SqliteStore::new(dir.path()).unwrap();
        let sim = SimBuilder::new(config).persistence(store).build().unwrap();
        let mut second = sim.registry.ids();
        second.sort();
        assert_eq!(first, second);
    }
}
