//! The canonical vehicle store.

use dashmap::DashMap;
use fleet_core::{SimConfig, SimRng, VehicleId, VehicleRecord};
use fleet_kinematics::VehicleState;
use tracing::info;

use crate::plate::PlateGenerator;
use crate::RegistryResult;

/// Owns the authoritative in-memory state of every simulated vehicle.
///
/// Backed by a sharded concurrent map: the tick loop takes per-entry
/// exclusive references during its mutation pass while query collaborators
/// read concurrently, and a reader can never observe a torn `VehicleState`.
/// Fleet size is fixed after seeding — vehicles are never added or removed
/// for the lifetime of the process.
pub struct FleetRegistry {
    /// All vehicle state, keyed by plate.  Exposed for the orchestrator's
    /// per-tick iteration; collaborators should prefer the read accessors.
    pub vehicles: DashMap<VehicleId, VehicleState>,
}

impl FleetRegistry {
    /// Seed the fleet.
    ///
    /// If `existing` already holds at least `config.vehicle_count` records
    /// they are rehydrated verbatim and nothing is generated.  Otherwise the
    /// persisted records are ignored and a fresh fleet of exactly
    /// `vehicle_count` vehicles is generated with unique plates.
    pub fn seed(
        config: &SimConfig,
        existing: Vec<VehicleRecord>,
        rng: &mut SimRng,
    ) -> RegistryResult<Self> {
        let vehicles = DashMap::with_capacity(config.vehicle_count);

        if existing.len() >= config.vehicle_count {
            for record in &existing {
                vehicles.insert(record.vehicle.clone(), VehicleState::rehydrated(record, rng));
            }
            info!(count = existing.len(), "loaded existing vehicles from storage");
            return Ok(Self { vehicles });
        }

        info!(
            count = config.vehicle_count,
            center_lat = config.region.center_lat,
            center_lng = config.region.center_lng,
            "seeding fresh fleet"
        );
        let mut plates = PlateGenerator::new();
        for _ in 0..config.vehicle_count {
            let id = plates.next_plate(rng)?;
            vehicles.insert(id.clone(), VehicleState::seeded(id, &config.region, rng));
        }
        Ok(Self { vehicles })
    }

    /// Clone of one vehicle's current state.
    pub fn get(&self, id: &VehicleId) -> Option<VehicleState> {
        self.vehicles.get(id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: &VehicleId) -> bool {
        self.vehicles.contains_key(id)
    }

    /// Snapshot clones of the whole fleet, in map iteration order.
    pub fn states(&self) -> Vec<VehicleState> {
        self.vehicles.iter().map(|entry| entry.value().clone()).collect()
    }

    /// All plates currently registered.
    pub fn ids(&self) -> Vec<VehicleId> {
        self.vehicles.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Persistable last-known records for the whole fleet.
    pub fn records(&self, updated_unix_ms: i64) -> Vec<VehicleRecord> {
        self.vehicles
            .iter()
            .map(|entry| entry.value().record(updated_unix_ms))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
