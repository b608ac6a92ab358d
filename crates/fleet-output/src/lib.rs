//! `fleet-output` — storage and broadcast backends for the fleet simulator.
//!
//! Persistence backends (implement `fleet_sim::PersistenceSink`):
//!
//! | Feature  | Backend | Files created                  | Rehydration |
//! |----------|---------|--------------------------------|-------------|
//! | *(none)* | CSV     | `telemetry.csv`, `alerts.csv`  | no          |
//! | `sqlite` | SQLite  | `fleet.db`                     | yes         |
//!
//! [`JsonFeed`] implements `fleet_sim::BroadcastSink` and writes enveloped
//! JSON lines to any `Write`, with a runtime alerts toggle.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_output::{CsvStore, JsonFeed};
//!
//! let store = CsvStore::new(Path::new("./output"))?;
//! let feed = JsonFeed::new(std::io::stdout().lock());
//! let mut sim = SimBuilder::new(config).persistence(store).broadcast(feed).build()?;
//! sim.run_ticks(60, &mut NoopObserver);
//! ```

pub mod csv;
pub mod error;
pub mod feed;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvStore;
pub use error::{OutputError, OutputResult};
pub use feed::JsonFeed;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
