//! `fleet-sim` — the periodic tick orchestrator.
//!
//! # The tick
//!
//! ```text
//! every tick_interval_ms:
//!   ① Advance   — run the kinematic transition for every vehicle
//!                 (parallel with the `parallel` feature).
//!   ② Evaluate  — feed each fresh snapshot to the alert engine.
//!   ③ Persist   — hand the telemetry batch, alert batch, and vehicle
//!                 upserts to the persistence sink (failures logged,
//!                 never fatal).
//!   ④ Broadcast — chunk telemetry into ≤ broadcast_chunk sub-batches;
//!                 forward alerts one by one, gated on the sink's
//!                 alerts-enabled toggle.
//! ```
//!
//! Batches are emitted once per tick, not per vehicle, to bound I/O volume.
//! Ticks queue behind a monotonic deadline: an overrunning tick delays its
//! successors but never causes one to be skipped or merged.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                             |
//! |------------|----------------------------------------------------|
//! | `parallel` | Runs the advance/evaluate pass on Rayon's pool.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_core::SimConfig;
//! use fleet_sim::{NoopBroadcast, NoopObserver, NoopPersistence, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .persistence(NoopPersistence)
//!     .broadcast(NoopBroadcast)
//!     .build()?;
//! sim.run_ticks(60, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod sinks;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::FleetSim;
pub use sinks::{BroadcastSink, NoopBroadcast, NoopPersistence, PersistenceSink, SinkError};
