//! Output collaborator traits.
//!
//! The orchestrator never performs I/O itself; it hands per-tick batches to
//! these sinks.  Sink failures are logged by the tick loop and the tick
//! proceeds — the in-memory registry stays the source of truth, and there is
//! no partial-tick rollback.

use std::error::Error;

use fleet_core::{Alert, TelemetrySnapshot, VehicleRecord};
use thiserror::Error;

/// Error reported by a sink implementation.
///
/// The orchestrator treats all sink errors alike (log and continue), so a
/// single opaque wrapper suffices; backends keep their own typed errors and
/// convert at the trait boundary.
#[derive(Debug, Error)]
#[error("sink failure: {0}")]
pub struct SinkError(pub Box<dyn Error + Send + Sync>);

impl SinkError {
    pub fn backend<E: Error + Send + Sync + 'static>(error: E) -> Self {
        SinkError(Box::new(error))
    }
}

// ── PersistenceSink ──────────────────────────────────────────────────────────

/// Storage backend: vehicle upserts plus append-only telemetry/alert logs.
///
/// No transactional ordering is guaranteed between the three writes within a
/// tick.  `load_vehicles` is only called once, at seeding time.
pub trait PersistenceSink {
    /// Last-known vehicle records from a previous run, for rehydration.
    ///
    /// Backends without a vehicle table return an empty vec (the default).
    fn load_vehicles(&mut self) -> Result<Vec<VehicleRecord>, SinkError> {
        Ok(Vec::new())
    }

    /// Upsert the fleet's last-known state, keyed by plate.
    fn upsert_vehicles(&mut self, records: &[VehicleRecord]) -> Result<(), SinkError>;

    /// Append one tick's telemetry batch.
    fn append_telemetry(&mut self, batch: &[TelemetrySnapshot]) -> Result<(), SinkError>;

    /// Append one tick's alert batch.
    fn append_alerts(&mut self, batch: &[Alert]) -> Result<(), SinkError>;

    /// Flush buffered writes.  Called once when the run ends.
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Discards everything.  For tests and persistence-free runs.
pub struct NoopPersistence;

impl PersistenceSink for NoopPersistence {
    fn upsert_vehicles(&mut self, _records: &[VehicleRecord]) -> Result<(), SinkError> {
        Ok(())
    }

    fn append_telemetry(&mut self, _batch: &[TelemetrySnapshot]) -> Result<(), SinkError> {
        Ok(())
    }

    fn append_alerts(&mut self, _batch: &[Alert]) -> Result<(), SinkError> {
        Ok(())
    }
}

// ── BroadcastSink ────────────────────────────────────────────────────────────

/// Live-subscriber transport.
///
/// Takes `&self`: the sink is typically shared with a control surface that
/// flips the alerts toggle while the tick loop is running.
pub trait BroadcastSink {
    /// Forward one telemetry sub-batch (the orchestrator has already chunked
    /// it to at most `broadcast_chunk` snapshots).
    fn telemetry_batch(&self, batch: &[TelemetrySnapshot]) -> Result<(), SinkError>;

    /// Forward one alert.
    fn alert(&self, alert: &Alert) -> Result<(), SinkError>;

    /// Whether alert forwarding is currently enabled.
    ///
    /// The orchestrator checks this immediately before each alert send.
    /// While disabled, alerts are still computed, persisted, and
    /// cooldown-tracked — they are simply not forwarded.
    fn alerts_enabled(&self) -> bool {
        true
    }
}

/// Discards everything.  For tests and headless runs.
pub struct NoopBroadcast;

impl BroadcastSink for NoopBroadcast {
    fn telemetry_batch(&self, _batch: &[TelemetrySnapshot]) -> Result<(), SinkError> {
        Ok(())
    }

    fn alert(&self, _alert: &Alert) -> Result<(), SinkError> {
        Ok(())
    }
}
