//! Per-vehicle simulation state.

use std::f64::consts::PI;

use fleet_core::{RegionConfig, SimRng, TelemetrySnapshot, VehicleId, VehicleRecord};

/// The full simulation state of one vehicle.
///
/// Owned by the registry; mutated only by [`advance`][crate::advance] under
/// the orchestrator's control.  The first six fields are observable (they
/// feed telemetry snapshots and the persisted record); the last three are
/// internal kinematic state that is re-derived on rehydration.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    /// Registration plate, assigned once at creation.
    pub id: VehicleId,
    /// Degrees.  Unbounded drift — no map-boundary clamping.
    pub latitude: f64,
    /// Degrees.  Unbounded drift.
    pub longitude: f64,
    /// km/h, kept in `[0, 160]` by the transition.
    pub speed: f64,
    /// Percent.  Steady-state `[5, 100]`; may transiently read below 5
    /// right before the refuel rule snaps it back up.
    pub fuel_level: f64,
    /// °C, kept in `[60, 125]` by the transition.
    pub engine_temp: f64,
    /// Radians.  Accumulates without normalization.
    pub heading: f64,
    /// Cruise-control setpoint the vehicle converges toward, km/h.
    pub target_speed: f64,
    /// Remaining ticks of a stopped episode; `0` means driving.
    pub stop_ticks: u32,
}

impl VehicleState {
    /// Fresh vehicle with randomized position and sensor values.
    ///
    /// Position is uniform in the region's seeding box; speed in `[30, 100]`,
    /// fuel in `[40, 100]`, temperature in `[75, 90]`.  Heading is a uniform
    /// compass direction and the cruise setpoint starts at the current speed.
    pub fn seeded(id: VehicleId, region: &RegionConfig, rng: &mut SimRng) -> Self {
        let latitude = region.center_lat + rng.gen_range(-region.spread_lat..=region.spread_lat);
        let longitude = region.center_lng + rng.gen_range(-region.spread_lng..=region.spread_lng);
        let speed = rng.gen_range(30.0..100.0);
        Self {
            id,
            latitude,
            longitude,
            speed,
            fuel_level:   rng.gen_range(40.0..100.0),
            engine_temp:  rng.gen_range(75.0..90.0),
            heading:      rng.gen_range(0.0..(2.0 * PI)),
            target_speed: speed,
            stop_ticks:   0,
        }
    }

    /// Rebuild a vehicle from its persisted last-known values.
    ///
    /// Sensor values come back verbatim; heading is re-randomized and the
    /// cruise setpoint restarts at the persisted speed.
    pub fn rehydrated(record: &VehicleRecord, rng: &mut SimRng) -> Self {
        Self {
            id:           record.vehicle.clone(),
            latitude:     record.latitude,
            longitude:    record.longitude,
            speed:        record.speed,
            fuel_level:   record.fuel_level,
            engine_temp:  record.engine_temp,
            heading:      rng.gen_range(0.0..(2.0 * PI)),
            target_speed: record.speed,
            stop_ticks:   0,
        }
    }

    /// `true` while the vehicle is in a stopped episode.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop_ticks > 0
    }

    /// Derive the immutable telemetry reading for this tick.
    pub fn snapshot(&self, unix_time_ms: i64) -> TelemetrySnapshot {
        TelemetrySnapshot {
            vehicle:      self.id.clone(),
            latitude:     self.latitude,
            longitude:    self.longitude,
            speed:        self.speed,
            fuel_level:   self.fuel_level,
            engine_temp:  self.engine_temp,
            unix_time_ms,
        }
    }

    /// Derive the persisted last-known record for this tick.
    pub fn record(&self, updated_unix_ms: i64) -> VehicleRecord {
        VehicleRecord {
            vehicle:         self.id.clone(),
            latitude:        self.latitude,
            longitude:       self.longitude,
            speed:           self.speed,
            fuel_level:      self.fuel_level,
            engine_temp:     self.engine_temp,
            updated_unix_ms,
        }
    }
}
