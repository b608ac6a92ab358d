//! `fleet-alerts` — threshold evaluation with duplicate suppression.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`rules`]    | `AlertRule` — data-driven threshold/severity/message table |
//! | [`cooldown`] | `CooldownTable` — per-(vehicle, kind) emission timestamps |
//! | [`engine`]   | `AlertEngine` — snapshot in, zero or more alerts out      |
//!
//! # Design notes
//!
//! Thresholds are a table of [`AlertRule`]s rather than hard-coded branches,
//! so adding an alert kind is one new table row.  The engine is pure apart
//! from the cooldown table, whose check-then-set is atomic per key — safe to
//! call from a parallelized per-vehicle loop.

pub mod cooldown;
pub mod engine;
pub mod rules;


pub use cooldown::CooldownTable;
pub use engine::AlertEngine;
pub use rules::{AlertRule, Bound, DEFAULT_RULES};
