//! SQLite persistence backend (feature `sqlite`).
//!
//! Creates a single `fleet.db` file in the configured output directory with
//! three tables: `vehicles` (upsert by plate), `telemetry` and `alerts`
//! (append-only).  The `vehicles` table is what a later run reads back to
//! rehydrate the fleet.

use std::path::Path;

use rusqlite::Connection;

use fleet_core::{Alert, TelemetrySnapshot, VehicleId, VehicleRecord};
use fleet_sim::{PersistenceSink, SinkError};

use crate::OutputResult;

/// Writes fleet output to an SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) `fleet.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("fleet.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS vehicles (
                 vehicle         TEXT PRIMARY KEY,
                 latitude        REAL NOT NULL,
                 longitude       REAL NOT NULL,
                 speed           REAL NOT NULL,
                 fuel_level      REAL NOT NULL,
                 engine_temp     REAL NOT NULL,
                 updated_unix_ms INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS telemetry (
                 vehicle      TEXT NOT NULL,
                 latitude     REAL NOT NULL,
                 longitude    REAL NOT NULL,
                 speed        REAL NOT NULL,
                 fuel_level   REAL NOT NULL,
                 engine_temp  REAL NOT NULL,
                 unix_time_ms INTEGER NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_telemetry_vehicle_time
                 ON telemetry (vehicle, unix_time_ms);
             CREATE TABLE IF NOT EXISTS alerts (
                 vehicle      TEXT NOT NULL,
                 kind         TEXT NOT NULL,
                 severity     TEXT NOT NULL,
                 message      TEXT NOT NULL,
                 unix_time_ms INTEGER NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_alerts_vehicle_time
                 ON alerts (vehicle, unix_time_ms);",
        )?;

        Ok(Self { conn })
    }

    fn read_vehicles(&self) -> OutputResult<Vec<VehicleRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT vehicle, latitude, longitude, speed, fuel_level, engine_temp, updated_unix_ms \
             FROM vehicles",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(VehicleRecord {
                vehicle:         VehicleId::new(row.get::<_, String>(0)?),
                latitude:        row.get(1)?,
                longitude:       row.get(2)?,
                speed:           row.get(3)?,
                fuel_level:      row.get(4)?,
                engine_temp:     row.get(5)?,
                updated_unix_ms: row.get(6)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    fn write_vehicles(&mut self, records: &[VehicleRecord]) -> OutputResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO vehicles \
                 (vehicle, latitude, longitude, speed, fuel_level, engine_temp, updated_unix_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
                 ON CONFLICT (vehicle) DO UPDATE SET \
                 latitude = ?2, longitude = ?3, speed = ?4, fuel_level = ?5, \
                 engine_temp = ?6, updated_unix_ms = ?7",
            )?;
            for record in records {
                stmt.execute(rusqlite::params![
                    record.vehicle.as_str(),
                    record.latitude,
                    record.longitude,
                    record.speed,
                    record.fuel_level,
                    record.engine_temp,
                    record.updated_unix_ms,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_telemetry(&mut self, batch: &[TelemetrySnapshot]) -> OutputResult<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO telemetry \
                 (vehicle, latitude, longitude, speed, fuel_level, engine_temp, unix_time_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for snapshot in batch {
                stmt.execute(rusqlite::params![
                    snapshot.vehicle.as_str(),
                    snapshot.latitude,
                    snapshot.longitude,
                    snapshot.speed,
                    snapshot.fuel_level,
                    snapshot.engine_temp,
                    snapshot.unix_time_ms,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_alerts(&mut self, batch: &[Alert]) -> OutputResult<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO alerts (vehicle, kind, severity, message, unix_time_ms) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for alert in batch {
                stmt.execute(rusqlite::params![
                    alert.vehicle.as_str(),
                    alert.kind.to_string(),
                    alert.severity.to_string(),
                    alert.message,
                    alert.unix_time_ms,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

impl PersistenceSink for SqliteStore {
    fn load_vehicles(&mut self) -> Result<Vec<VehicleRecord>, SinkError> {
        Ok(self.read_vehicles()?)
    }

    fn upsert_vehicles(&mut self, records: &[VehicleRecord]) -> Result<(), SinkError> {
        Ok(self.write_vehicles(records)?)
    }

    fn append_telemetry(&mut self, batch: &[TelemetrySnapshot]) -> Result<(), SinkError> {
        Ok(self.write_telemetry(batch)?)
    }

    fn append_alerts(&mut self, batch: &[Alert]) -> Result<(), SinkError> {
        Ok(self.write_alerts(batch)?)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
            .map_err(crate::OutputError::Sqlite)?;
        Ok(())
    }
}
