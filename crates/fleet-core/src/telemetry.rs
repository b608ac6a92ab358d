//! Telemetry value types.

use serde::{Deserialize, Serialize};

use crate::{GeoPoint, VehicleId};

/// An immutable telemetry reading for one vehicle at one tick.
///
/// Produced once per vehicle per tick by the orchestrator, consumed by the
/// alert engine and the output sinks.  Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub vehicle:      VehicleId,
    pub latitude:     f64,
    pub longitude:    f64,
    /// km/h, in `[0, 160]`.
    pub speed:        f64,
    /// Percent, steady-state `[5, 100]`.
    pub fuel_level:   f64,
    /// °C, in `[60, 125]`.
    pub engine_temp:  f64,
    /// Unix milliseconds at which the reading was taken.
    pub unix_time_ms: i64,
}

impl TelemetrySnapshot {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// The persisted last-known state of one vehicle.
///
/// Written once per tick (upsert by `vehicle`) and read back at startup to
/// rehydrate the fleet.  Only the observable sensor values are persisted;
/// internal kinematic state (heading, cruise setpoint, stop counter) is
/// re-derived on rehydration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub vehicle:         VehicleId,
    pub latitude:        f64,
    pub longitude:       f64,
    pub speed:           f64,
    pub fuel_level:      f64,
    pub engine_temp:     f64,
    /// Unix milliseconds of the last upsert.
    pub updated_unix_ms: i64,
}
