//! Tick observer trait for progress reporting.

use fleet_core::Tick;

/// Callbacks invoked by [`FleetSim::run`][crate::FleetSim::run] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, telemetry: usize, alerts: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {telemetry} snapshots, {alerts} alerts");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle advances.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's batches have been handed to the sinks.
    ///
    /// `telemetry` and `alerts` are the batch sizes for this tick.
    fn on_tick_end(&mut self, _tick: Tick, _telemetry: usize, _alerts: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
