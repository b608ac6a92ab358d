//! CSV persistence backend.
//!
//! Creates two append-only files in the configured output directory:
//! - `telemetry.csv`
//! - `alerts.csv`
//!
//! CSV has no keyed table, so vehicle upserts are dropped and
//! `load_vehicles` reports an empty fleet: a CSV-backed run always seeds
//! fresh vehicles.  Use the SQLite backend when rehydration matters.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use fleet_core::{Alert, TelemetrySnapshot, VehicleRecord};
use fleet_sim::{PersistenceSink, SinkError};

use crate::{OutputError, OutputResult};

/// Writes telemetry and alert batches to two CSV files.
pub struct CsvStore {
    telemetry: Writer<File>,
    alerts:    Writer<File>,
}

impl CsvStore {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut telemetry = Writer::from_path(dir.join("telemetry.csv"))?;
        telemetry.write_record([
            "vehicle", "latitude", "longitude", "speed", "fuel_level", "engine_temp", "unix_time_ms",
        ])?;

        let mut alerts = Writer::from_path(dir.join("alerts.csv"))?;
        alerts.write_record(["vehicle", "kind", "severity", "message", "unix_time_ms"])?;

        Ok(Self { telemetry, alerts })
    }

    fn write_telemetry(&mut self, batch: &[TelemetrySnapshot]) -> OutputResult<()> {
        for snapshot in batch {
            self.telemetry.write_record(&[
                snapshot.vehicle.as_str().to_owned(),
                snapshot.latitude.to_string(),
                snapshot.longitude.to_string(),
                snapshot.speed.to_string(),
                snapshot.fuel_level.to_string(),
                snapshot.engine_temp.to_string(),
                snapshot.unix_time_ms.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_alerts(&mut self, batch: &[Alert]) -> OutputResult<()> {
        for alert in batch {
            self.alerts.write_record(&[
                alert.vehicle.as_str().to_owned(),
                alert.kind.to_string(),
                alert.severity.to_string(),
                alert.message.clone(),
                alert.unix_time_ms.to_string(),
            ])?;
        }
        Ok(())
    }

    fn flush_all(&mut self) -> OutputResult<()> {
        self.telemetry.flush().map_err(OutputError::Io)?;
        self.alerts.flush().map_err(OutputError::Io)?;
        Ok(())
    }
}

impl PersistenceSink for CsvStore {
    /// No vehicle table: upserts are dropped.
    fn upsert_vehicles(&mut self, _records: &[VehicleRecord]) -> Result<(), SinkError> {
        Ok(())
    }

    fn append_telemetry(&mut self, batch: &[TelemetrySnapshot]) -> Result<(), SinkError> {
        Ok(self.write_telemetry(batch)?)
    }

    fn append_alerts(&mut self, batch: &[Alert]) -> Result<(), SinkError> {
        Ok(self.write_alerts(batch)?)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(self.flush_all()?)
    }
}
