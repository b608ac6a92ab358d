//! The one-tick kinematic transition.

use fleet_core::VehicleRng;

use crate::VehicleState;

// ── Tuning constants ─────────────────────────────────────────────────────────

/// Hard speed range, km/h.
pub const SPEED_MAX: f64 = 160.0;
/// Hard engine-temperature range, °C.
pub const TEMP_MIN: f64 = 60.0;
pub const TEMP_MAX: f64 = 125.0;
/// Below this fuel percentage the vehicle instantly refuels.
pub const FUEL_REFUEL_FLOOR: f64 = 5.0;

/// Probability per tick that a driving vehicle enters a stopped episode.
const STOP_PROBABILITY: f64 = 0.03;
/// Probability per tick of a larger heading jump (a turn at an intersection).
const TURN_PROBABILITY: f64 = 0.05;
/// Probability per tick of picking a new cruise setpoint.
const RETARGET_PROBABILITY: f64 = 0.1;
/// Probability per tick of an overheat spike.
const OVERHEAT_PROBABILITY: f64 = 0.015;

/// Degrees of travel per km/h-second.  Deliberately crude: the point is a
/// plausible, bounded drift rate, not geodesy.
const DEG_PER_KMH_SEC: f64 = 0.009;

/// Advance one vehicle by one tick.
///
/// Total over its domain — every write is clamped back into the documented
/// ranges, so the function cannot fail.  Deterministic given a seeded `rng`.
pub fn advance(state: &mut VehicleState, rng: &mut VehicleRng) {
    if state.stop_ticks > 0 {
        advance_stopped(state, rng);
        return;
    }

    // Traffic light, loading stop: freeze movement for 5–15 ticks.  The
    // episode's first decrement happens next tick, so position is already
    // frozen from this tick on.
    if rng.gen_bool(STOP_PROBABILITY) {
        state.stop_ticks = rng.gen_range(5..=15u32);
        return;
    }

    advance_driving(state, rng);
}

/// Stopped mode: decay speed, relax temperature toward idle, idle fuel drain.
/// Position never changes.
fn advance_stopped(state: &mut VehicleState, rng: &mut VehicleRng) {
    state.stop_ticks -= 1;

    state.speed = (state.speed * 0.7).max(0.0);

    state.engine_temp += (75.0 - state.engine_temp) * 0.1 + rng.gen_range(-0.25..0.25);
    state.engine_temp = state.engine_temp.clamp(TEMP_MIN, TEMP_MAX);

    state.fuel_level -= 0.005 + rng.gen_range(0.0..0.01);
    refuel_if_empty(state, rng);
}

/// Driving mode: steer, advance position, chase the cruise setpoint, burn
/// fuel, track the speed-dependent temperature baseline.
fn advance_driving(state: &mut VehicleState, rng: &mut VehicleRng) {
    // Sharper steering at low speed, straighter at high speed.
    let steer = 0.15 / (1.0 + state.speed * 0.01);
    state.heading += rng.gen_range(-steer..steer);

    if rng.gen_bool(TURN_PROBABILITY) {
        state.heading += rng.gen_range(-std::f64::consts::FRAC_PI_4..std::f64::consts::FRAC_PI_4);
    }

    let distance_deg = (state.speed.max(0.0) / 3_600.0) * DEG_PER_KMH_SEC;
    state.latitude += state.heading.cos() * distance_deg;
    state.longitude += state.heading.sin() * distance_deg;

    // Cruise-control reset.
    if rng.gen_bool(RETARGET_PROBABILITY) {
        state.target_speed = rng.gen_range(20.0..140.0);
    }
    state.speed += (state.target_speed - state.speed) * rng.gen_range(0.05..0.15);
    state.speed += rng.gen_range(-1.5..1.5);
    state.speed = state.speed.clamp(0.0, SPEED_MAX);

    // Consumption grows with speed.
    state.fuel_level -= 0.01 + (state.speed / SPEED_MAX) * 0.07 + rng.gen_range(0.0..0.02);
    refuel_if_empty(state, rng);

    // Relax toward a speed-dependent baseline, with the occasional spike.
    let base_temp = 72.0 + (state.speed / SPEED_MAX) * 25.0;
    state.engine_temp += (base_temp - state.engine_temp) * 0.08 + rng.gen_range(-1.0..1.0);
    if rng.gen_bool(OVERHEAT_PROBABILITY) {
        state.engine_temp += 12.0 + rng.gen_range(0.0..10.0);
    }
    state.engine_temp = state.engine_temp.clamp(TEMP_MIN, TEMP_MAX);
}

/// Instant refuel/swap event: once the gauge crosses the floor, snap back to
/// a high level.  A simulation convenience, not a fuel-gauge model — the
/// observable behavior is a fleet that never runs dry.
fn refuel_if_empty(state: &mut VehicleState, rng: &mut VehicleRng) {
    if state.fuel_level < FUEL_REFUEL_FLOOR {
        state.fuel_level = rng.gen_range(80.0..100.0);
    }
}
