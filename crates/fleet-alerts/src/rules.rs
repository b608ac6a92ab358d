//! The threshold rule table.

use fleet_core::{AlertKind, Severity, TelemetrySnapshot};

/// Which side of the thresholds is dangerous.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Readings strictly above the threshold breach it (speed, temperature).
    Above,
    /// Readings strictly below the threshold breach it (fuel).
    Below,
}

/// One row of the alert policy: which reading to watch, where its warning
/// and critical boundaries sit, and how to phrase the alert.
pub struct AlertRule {
    pub kind:     AlertKind,
    pub bound:    Bound,
    pub warning:  f64,
    pub critical: f64,
    /// Extracts the watched reading from a snapshot.
    pub metric:   fn(&TelemetrySnapshot) -> f64,
    /// Renders the alert message for a breaching reading.
    pub message:  fn(&TelemetrySnapshot, f64) -> String,
}

impl AlertRule {
    /// Severity of `value` under this rule, or `None` if within bounds.
    ///
    /// Comparisons are strict; severity is recomputed fresh on every
    /// evaluation, so a reading hovering past the critical boundary is
    /// classified at whatever tier applies at that instant.
    pub fn breached(&self, value: f64) -> Option<Severity> {
        match self.bound {
            Bound::Above => {
                if value > self.critical {
                    Some(Severity::Critical)
                } else if value > self.warning {
                    Some(Severity::Warning)
                } else {
                    None
                }
            }
            Bound::Below => {
                if value < self.critical {
                    Some(Severity::Critical)
                } else if value < self.warning {
                    Some(Severity::Warning)
                } else {
                    None
                }
            }
        }
    }
}

// ── Default policy ───────────────────────────────────────────────────────────

fn overspeed_message(snapshot: &TelemetrySnapshot, value: f64) -> String {
    format!("Vehicle {} speeding at {value:.1} km/h", snapshot.vehicle)
}

fn low_fuel_message(snapshot: &TelemetrySnapshot, value: f64) -> String {
    format!("Vehicle {} fuel low at {value:.1}%", snapshot.vehicle)
}

fn overheat_message(snapshot: &TelemetrySnapshot, value: f64) -> String {
    format!("Vehicle {} engine at {value:.1}°C", snapshot.vehicle)
}

/// The stock fleet policy: overspeed, low fuel, engine overheat.
pub const DEFAULT_RULES: &[AlertRule] = &[
    AlertRule {
        kind:     AlertKind::Overspeed,
        bound:    Bound::Above,
        warning:  120.0,
        critical: 140.0,
        metric:   |s| s.speed,
        message:  overspeed_message,
    },
    AlertRule {
        kind:     AlertKind::LowFuel,
        bound:    Bound::Below,
        warning:  15.0,
        critical: 10.0,
        metric:   |s| s.fuel_level,
        message:  low_fuel_message,
    },
    AlertRule {
        kind:     AlertKind::EngineOverheat,
        bound:    Bound::Above,
        warning:  100.0,
        critical: 110.0,
        metric:   |s| s.engine_temp,
        message:  overheat_message,
    },
];
