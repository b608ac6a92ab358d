//! Fluent builder for constructing a [`FleetSim`].

use fleet_alerts::AlertEngine;
use fleet_core::{SimConfig, SimRng, VehicleRng};
use fleet_registry::FleetRegistry;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::sinks::{BroadcastSink, NoopBroadcast, NoopPersistence, PersistenceSink};
use crate::{FleetSim, SimResult};

/// Fluent builder for [`FleetSim<P, B>`].
///
/// Starts with no-op sinks; swap in real backends with
/// [`persistence`][Self::persistence] and [`broadcast`][Self::broadcast].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .persistence(SqliteStore::open(path)?)
///     .broadcast(JsonFeed::new(writer))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: PersistenceSink, B: BroadcastSink> {
    config:      SimConfig,
    persistence: P,
    broadcast:   B,
}

impl SimBuilder<NoopPersistence, NoopBroadcast> {
    /// Create a builder with no-op sinks.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            persistence: NoopPersistence,
            broadcast:   NoopBroadcast,
        }
    }
}

impl<P: PersistenceSink, B: BroadcastSink> SimBuilder<P, B> {
    /// Supply the storage backend.  Also consulted at build time for
    /// rehydrating a previously persisted fleet.
    pub fn persistence<P2: PersistenceSink>(self, persistence: P2) -> SimBuilder<P2, B> {
        SimBuilder {
            config: self.config,
            persistence,
            broadcast: self.broadcast,
        }
    }

    /// Supply the live-subscriber transport.
    pub fn broadcast<B2: BroadcastSink>(self, broadcast: B2) -> SimBuilder<P, B2> {
        SimBuilder {
            config: self.config,
            persistence: self.persistence,
            broadcast,
        }
    }

    /// Validate the configuration, seed the fleet (from storage when enough
    /// records exist, freshly otherwise), and return a ready-to-run sim.
    ///
    /// A failing `load_vehicles` is fatal here — silently starting a fresh
    /// fleet on a broken store would shadow the persisted one.  Failures of
    /// the *initial* fleet write are logged and tolerated like any other
    /// sink failure.
    pub fn build(mut self) -> SimResult<FleetSim<P, B>> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let existing = self.persistence.load_vehicles()?;
        let freshly_generated = existing.len() < self.config.vehicle_count;
        let registry = FleetRegistry::seed(&self.config, existing, &mut rng)?;

        let rngs: FxHashMap<_, _> = registry
            .ids()
            .into_iter()
            .map(|id| {
                let vehicle_rng = VehicleRng::new(self.config.seed, &id);
                (id, Mutex::new(vehicle_rng))
            })
            .collect();

        let clock = self.config.make_clock();
        let alerts = AlertEngine::new(self.config.cooldown_ms());

        if freshly_generated {
            let records = registry.records(clock.current_unix_ms());
            if let Err(error) = self.persistence.upsert_vehicles(&records) {
                warn!(%error, "initial fleet write failed; continuing with in-memory fleet");
            }
        }

        Ok(FleetSim {
            config: self.config,
            clock,
            registry,
            alerts,
            rngs,
            persistence: self.persistence,
            broadcast: self.broadcast,
        })
    }
}
