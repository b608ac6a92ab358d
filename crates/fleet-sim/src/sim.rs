//! The `FleetSim` struct and its tick loop.

use std::time::{Duration, Instant};

use fleet_alerts::AlertEngine;
use fleet_core::{Alert, SimClock, SimConfig, TelemetrySnapshot, VehicleId, VehicleRng};
use fleet_registry::FleetRegistry;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::observer::SimObserver;
use crate::sinks::{BroadcastSink, PersistenceSink};

/// The periodic driver of the simulation.
///
/// Each tick advances every vehicle, evaluates alerts, and hands one
/// telemetry batch and one alert batch to the output sinks.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct FleetSim<P: PersistenceSink, B: BroadcastSink> {
    /// Global configuration (fleet size, seed, tick interval, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps it to wall time.
    pub clock: SimClock,

    /// The canonical vehicle store.  Mutated by the tick's advance pass;
    /// safe for collaborators to read concurrently.
    pub registry: FleetRegistry,

    /// Threshold evaluation with cooldown suppression.
    pub alerts: AlertEngine,

    /// Per-vehicle deterministic RNGs.  The mutexes are uncontended — each
    /// vehicle is advanced by exactly one worker per tick — and exist only
    /// to satisfy the shared-access pattern of the parallel pass.
    pub(crate) rngs: FxHashMap<VehicleId, Mutex<VehicleRng>>,

    pub(crate) persistence: P,
    pub(crate) broadcast:   B,
}

impl<P: PersistenceSink, B: BroadcastSink> FleetSim<P, B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run at the configured real-time pace until `config.total_ticks`
    /// ticks have elapsed (forever if `total_ticks` is 0).
    ///
    /// Ticks queue behind a monotonic deadline: if one tick overruns the
    /// interval, its successors fire late rather than being skipped or
    /// merged — back-pressure is absorbed as latency, not dropped work.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let interval = Duration::from_millis(self.config.tick_interval_ms);
        let mut deadline = Instant::now();

        while self.config.total_ticks == 0 || self.clock.current_tick.0 < self.config.total_ticks {
            self.step(observer);

            deadline += interval;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }

        if let Err(error) = self.persistence.flush() {
            warn!(%error, "final persistence flush failed");
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks back-to-back, without pacing.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// The broadcast sink (e.g. to flip its alerts toggle).
    pub fn broadcast(&self) -> &B {
        &self.broadcast
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let (telemetry_count, alert_count) = self.process_tick();
        observer.on_tick_end(now, telemetry_count, alert_count);
        self.clock.advance();
    }

    /// Advance the whole fleet by one tick and hand the batches off.
    ///
    /// Returns `(telemetry batch size, alert batch size)`.
    pub fn process_tick(&mut self) -> (usize, usize) {
        let now_ms = self.clock.current_unix_ms();
        let (telemetry, alerts) = self.advance_fleet(now_ms);
        self.emit(&telemetry, &alerts, now_ms);
        (telemetry.len(), alerts.len())
    }

    /// Phase ①/②: per-vehicle advance + alert evaluation.
    ///
    /// Vehicles are independent — no vehicle's transition reads another's
    /// state — so with the `parallel` feature the pass runs on Rayon's
    /// thread pool.  The only shared structure is the alert engine's
    /// cooldown table, which synchronizes internally per key.
    fn advance_fleet(&mut self, now_ms: i64) -> (Vec<TelemetrySnapshot>, Vec<Alert>) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let registry = &mut self.registry;
        let rngs = &self.rngs;
        let alerts = &self.alerts;

        let advance_one = |mut entry: dashmap::mapref::multiple::RefMutMulti<
            '_,
            VehicleId,
            fleet_kinematics::VehicleState,
        >| {
            let mut rng = rngs[entry.key()].lock();
            fleet_kinematics::advance(entry.value_mut(), &mut rng);
            drop(rng);
            let snapshot = entry.value().snapshot(now_ms);
            let vehicle_alerts = alerts.evaluate(&snapshot);
            (snapshot, vehicle_alerts)
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<(TelemetrySnapshot, Vec<Alert>)> =
            registry.vehicles.iter_mut().map(advance_one).collect();

        #[cfg(feature = "parallel")]
        let results: Vec<(TelemetrySnapshot, Vec<Alert>)> = {
            use rayon::prelude::*;
            (&mut registry.vehicles).into_par_iter().map(advance_one).collect()
        };

        let mut telemetry = Vec::with_capacity(results.len());
        let mut alert_batch = Vec::new();
        for (snapshot, mut vehicle_alerts) in results {
            telemetry.push(snapshot);
            alert_batch.append(&mut vehicle_alerts);
        }
        (telemetry, alert_batch)
    }

    /// Phase ③/④: hand the tick's batches to the sinks.
    ///
    /// Sink failures are logged and the tick proceeds; already-applied
    /// in-memory mutations stand (the registry, not storage, is the source
    /// of truth for the next tick).
    fn emit(&mut self, telemetry: &[TelemetrySnapshot], alerts: &[Alert], now_ms: i64) {
        if let Err(error) = self.persistence.append_telemetry(telemetry) {
            warn!(%error, "telemetry batch write failed; tick continues");
        }

        let records = self.registry.records(now_ms);
        if let Err(error) = self.persistence.upsert_vehicles(&records) {
            warn!(%error, "vehicle state upsert failed; tick continues");
        }

        if !alerts.is_empty() {
            if let Err(error) = self.persistence.append_alerts(alerts) {
                warn!(%error, "alert batch write failed; tick continues");
            }
        }

        for chunk in telemetry.chunks(self.config.broadcast_chunk) {
            if let Err(error) = self.broadcast.telemetry_batch(chunk) {
                warn!(%error, "telemetry broadcast failed");
            }
        }

        for alert in alerts {
            // The toggle is re-checked before every send, not once per tick.
            if !self.broadcast.alerts_enabled() {
                continue;
            }
            if let Err(error) = self.broadcast.alert(alert) {
                warn!(%error, "alert broadcast failed");
            }
        }
    }
}
