//! Top-level simulation configuration.
//!
//! Typically loaded from a config file by the application crate and passed
//! to the simulation builder.  Defaults reproduce the reference deployment:
//! a 500-vehicle fleet in the Gauteng region on a 1-second tick.

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, GeoPoint, SimClock, unix_now_ms};

// ── RegionConfig ─────────────────────────────────────────────────────────────

/// The geographic box vehicles are seeded into.
///
/// Seeding draws each coordinate uniformly from `center ± spread` per axis.
/// The box only constrains initial placement — vehicles drift freely out of
/// it afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub spread_lat: f64,
    pub spread_lng: f64,
}

impl RegionConfig {
    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lng)
    }

    /// Is `point` inside the seeding box?
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.within_box(self.center(), self.spread_lat, self.spread_lng)
    }
}

impl Default for RegionConfig {
    /// Gauteng, South Africa — Johannesburg/Pretoria metro box.
    fn default() -> Self {
        Self {
            center_lat: -26.20,
            center_lng: 28.04,
            spread_lat: 0.12,
            spread_lng: 0.18,
        }
    }
}

// ── SimConfig ────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fleet size.  Fixed for the lifetime of the process.
    pub vehicle_count: usize,

    /// Master RNG seed.  The same seed always produces identical kinematics.
    pub seed: u64,

    /// Wall milliseconds per tick.  Default: 1000 (1-second tick).
    pub tick_interval_ms: u64,

    /// Total ticks to simulate.  `0` means run until the process is stopped.
    pub total_ticks: u64,

    /// Unix timestamp (ms) of tick 0.  `None` anchors the clock to the
    /// system time when the simulation is built.
    pub start_unix_ms: Option<i64>,

    /// The seeding region.
    pub region: RegionConfig,

    /// Minimum seconds between two alerts of the same kind for one vehicle.
    pub alert_cooldown_secs: u64,

    /// Maximum snapshots per broadcast sub-batch.
    pub broadcast_chunk: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            vehicle_count:       500,
            seed:                42,
            tick_interval_ms:    1_000,
            total_ticks:         0,
            start_unix_ms:       None,
            region:              RegionConfig::default(),
            alert_cooldown_secs: 30,
            broadcast_chunk:     50,
        }
    }
}

impl SimConfig {
    /// Reject configurations the tick loop cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.vehicle_count == 0 {
            return Err(CoreError::Config("vehicle_count must be at least 1".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be at least 1".into()));
        }
        if self.broadcast_chunk == 0 {
            return Err(CoreError::Config("broadcast_chunk must be at least 1".into()));
        }
        if self.region.spread_lat < 0.0 || self.region.spread_lng < 0.0 {
            return Err(CoreError::Config("region spread must be non-negative".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run, anchored to the
    /// system time unless `start_unix_ms` pins it.
    pub fn make_clock(&self) -> SimClock {
        let start = self.start_unix_ms.unwrap_or_else(unix_now_ms);
        SimClock::new(start, self.tick_interval_ms)
    }

    /// Cooldown window in milliseconds.
    #[inline]
    pub fn cooldown_ms(&self) -> i64 {
        self.alert_cooldown_secs as i64 * 1_000
    }
}
