//! `fleet-kinematics` — per-vehicle state and the one-tick transition.
//!
//! The transition ([`advance`]) is a total function over its clamped domain:
//! no error cases exist, and given a seeded [`fleet_core::VehicleRng`] it is
//! fully deterministic.  All randomness comes in through the explicit RNG
//! argument, never from an ambient generator.
//!
//! # Design notes
//!
//! A vehicle is a two-mode state machine — **driving** or **stopped** — with
//! probabilistic transitions between the modes.  The small rule set produces
//! bursty, realistic-looking fleets (stop-and-go traffic, occasional
//! speeding, rare overheat spikes) without a physics or traffic model.

pub mod engine;
pub mod state;


pub use engine::advance;
pub use state::VehicleState;
