//! `fleet-registry` — the canonical in-memory vehicle store.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`plate`]    | Weighted province-code registration plate generator   |
//! | [`registry`] | `FleetRegistry` — seeding and concurrent lookup       |
//! | [`error`]    | `RegistryError`, `RegistryResult`                     |

pub mod error;
pub mod plate;
pub mod registry;


pub use error::{RegistryError, RegistryResult};
pub use plate::PlateGenerator;
pub use registry::FleetRegistry;
