//! Vehicle identifier type.
//!
//! Fleet vehicles are identified by their registration plate, a short string
//! such as `"GP 123 ABC"`.  Plates are assigned once at seeding time and are
//! immutable for the life of the process, so the identifier is stored as an
//! `Arc<str>`: clones are a reference-count bump, which matters because every
//! telemetry snapshot and alert carries the identifier.

use std::fmt;
use std::sync::Arc;

/// A vehicle's registration plate, e.g. `"GP 123 ABC"`.
///
/// Cheap to clone (`Arc<str>` inside) and usable as a map key via the usual
/// `Eq + Hash + Ord` impls.  Serializes as a plain string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VehicleId(Arc<str>);

impl VehicleId {
    /// Wrap a plate string.  No validation — plate syntax is owned by the
    /// registry's plate generator.
    pub fn new(plate: impl Into<Arc<str>>) -> Self {
        VehicleId(plate.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(s: &str) -> Self {
        VehicleId::new(s)
    }
}

impl From<String> for VehicleId {
    fn from(s: String) -> Self {
        VehicleId::new(s)
    }
}

// Manual serde impls so the wire format is a bare string rather than a
// newtype wrapper around `Arc<str>`.

impl serde::Serialize for VehicleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for VehicleId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(VehicleId::new(s))
    }
}
