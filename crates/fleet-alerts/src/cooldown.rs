//! Per-(vehicle, kind) alert cooldown tracking.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use fleet_core::{AlertKind, VehicleId};

/// Timestamps of the last emitted alert per `(vehicle, kind)` key.
///
/// Shared by all per-vehicle evaluations within a tick.  Entries are never
/// removed — growth is bounded by fleet size × alert-kind count, effectively
/// a constant.  The map's entry API holds the shard lock across the
/// check-then-set, so two concurrent evaluations of the same key can never
/// both acquire the window.
#[derive(Default)]
pub struct CooldownTable {
    last_emit_ms: DashMap<(VehicleId, AlertKind), i64>,
}

impl CooldownTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to claim an emission slot for `(vehicle, kind)` at `now_ms`.
    ///
    /// Returns `true` — and records `now_ms` — iff no alert was ever emitted
    /// for the key or at least `cooldown_ms` has elapsed since the last one.
    /// Returns `false` (and records nothing) while the window is still open.
    pub fn try_acquire(
        &self,
        vehicle: &VehicleId,
        kind: AlertKind,
        now_ms: i64,
        cooldown_ms: i64,
    ) -> bool {
        match self.last_emit_ms.entry((vehicle.clone(), kind)) {
            Entry::Occupied(mut occupied) => {
                if now_ms - *occupied.get() >= cooldown_ms {
                    occupied.insert(now_ms);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(now_ms);
                true
            }
        }
    }

    /// When the last alert for `(vehicle, kind)` was emitted, if ever.
    pub fn last_emission_ms(&self, vehicle: &VehicleId, kind: AlertKind) -> Option<i64> {
        self.last_emit_ms
            .get(&(vehicle.clone(), kind))
            .map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.last_emit_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_emit_ms.is_empty()
    }
}
