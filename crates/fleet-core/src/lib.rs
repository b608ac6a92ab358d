//! `fleet-core` — foundational types for the fleet simulator.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It
//! intentionally has no `fleet-*` dependencies and minimal external ones
//! (only `rand`, `serde`, `rustc-hash`, and `thiserror`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `VehicleId` — registration-plate identifier           |
//! | [`geo`]       | `GeoPoint`, bounding-box containment                  |
//! | [`time`]      | `Tick`, `SimClock`, wall-clock helpers                |
//! | [`config`]    | `SimConfig`, `RegionConfig`                           |
//! | [`rng`]       | `VehicleRng` (per-vehicle), `SimRng` (global)         |
//! | [`telemetry`] | `TelemetrySnapshot`, persisted `VehicleRecord`        |
//! | [`alert`]     | `Alert`, `AlertKind`, `Severity`                      |
//! | [`error`]     | `CoreError`, `CoreResult`                             |

pub mod alert;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod telemetry;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use alert::{Alert, AlertKind, Severity};
pub use config::{RegionConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::VehicleId;
pub use rng::{SimRng, VehicleRng};
pub use telemetry::{TelemetrySnapshot, VehicleRecord};
pub use time::{SimClock, Tick, unix_now_ms};
