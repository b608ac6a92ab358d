//! Alert value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::VehicleId;

/// The condition an alert reports.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Overspeed,
    LowFuel,
    EngineOverheat,
}

impl AlertKind {
    /// All alert kinds, in evaluation order.
    pub const ALL: [AlertKind; 3] = [
        AlertKind::Overspeed,
        AlertKind::LowFuel,
        AlertKind::EngineOverheat,
    ];
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertKind::Overspeed      => "OVERSPEED",
            AlertKind::LowFuel        => "LOW_FUEL",
            AlertKind::EngineOverheat => "ENGINE_OVERHEAT",
        };
        f.write_str(s)
    }
}

/// How far past the threshold the reading was.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Warning  => "WARNING",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

/// An emitted alert.  Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub vehicle:      VehicleId,
    pub kind:         AlertKind,
    pub severity:     Severity,
    pub message:      String,
    pub unix_time_ms: i64,
}
