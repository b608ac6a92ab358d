//! Registration plate generation.
//!
//! Plates follow the South African format `"<province> <3 digits> <3 letters>"`,
//! e.g. `"GP 123 ABC"`.  Province codes are drawn from a weighted
//! distribution reflecting where the fleet operates (Gauteng-heavy), via
//! cumulative-distribution sampling on a uniform draw.

use fleet_core::{SimRng, VehicleId};
use rustc_hash::FxHashSet;

use crate::{RegistryError, RegistryResult};

/// Province codes and their sampling weights.  Weights sum to 1.0.
pub const PROVINCES: [(&str, f64); 9] = [
    ("GP", 0.70),
    ("NW", 0.05),
    ("MP", 0.05),
    ("LP", 0.03),
    ("KZN", 0.05),
    ("WC", 0.04),
    ("EC", 0.03),
    ("FS", 0.03),
    ("NC", 0.02),
];

/// Collision-retry bound per plate.  The identifier space (~9 × 900 × 17576
/// plates) dwarfs any realistic fleet; hitting this bound means the
/// configuration asks for more vehicles than the space can hold and is
/// surfaced as a fatal startup error.
const MAX_ATTEMPTS: usize = 10_000;

/// Generates unique registration plates for one seeding run.
#[derive(Default)]
pub struct PlateGenerator {
    used: FxHashSet<VehicleId>,
}

impl PlateGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an externally sourced plate (e.g. rehydrated from storage) as
    /// taken, so fresh generation never collides with it.
    pub fn reserve(&mut self, id: VehicleId) {
        self.used.insert(id);
    }

    /// Generate the next unique plate.
    pub fn next_plate(&mut self, rng: &mut SimRng) -> RegistryResult<VehicleId> {
        for _ in 0..MAX_ATTEMPTS {
            let province = pick_province(rng);
            let digits: u32 = rng.gen_range(100..1_000);
            let letters: String = (0..3)
                .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
                .collect();
            let id = VehicleId::new(format!("{province} {digits:03} {letters}"));
            if self.used.insert(id.clone()) {
                return Ok(id);
            }
        }
        Err(RegistryError::PlateSpaceExhausted { attempts: MAX_ATTEMPTS })
    }

    /// Plates issued or reserved so far.
    pub fn issued(&self) -> usize {
        self.used.len()
    }
}

/// Cumulative-distribution sample over [`PROVINCES`].
///
/// The first code whose cumulative weight exceeds the draw wins; if
/// floating-point drift leaves the draw unmatched, the first code is the
/// deterministic fallback.
pub fn pick_province(rng: &mut SimRng) -> &'static str {
    let draw: f64 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (code, weight) in PROVINCES {
        cumulative += weight;
        if draw < cumulative {
            return code;
        }
    }
    PROVINCES[0].0
}
