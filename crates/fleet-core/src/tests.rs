//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod ids {
    use crate::VehicleId;

    #[test]
    fn display_is_bare_plate() {
        let id = VehicleId::new("GP 123 ABC");
        assert_eq!(id.to_string(), "GP 123 ABC");
        assert_eq!(id.as_str(), "GP 123 ABC");
    }

    #[test]
    fn clones_compare_equal() {
        let id = VehicleId::new("WC 987 ZZZ");
        let other = id.clone();
        assert_eq!(id, other);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = VehicleId::new("KZN 555 QRS");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"KZN 555 QRS\"");
        let back: VehicleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn box_check() {
        let center = GeoPoint::new(-26.20, 28.04);
        let nearby = GeoPoint::new(-26.25, 28.10);
        let far = GeoPoint::new(-27.0, 28.04);
        assert!(nearby.within_box(center, 0.12, 0.18));
        assert!(!far.within_box(center, 0.12, 0.18));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_maps_ticks_to_wall_ms() {
        let mut clock = SimClock::new(1_000_000, 1_000);
        assert_eq!(clock.current_unix_ms(), 1_000_000);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_ms(), 2_000);
        assert_eq!(clock.current_unix_ms(), 1_002_000);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn sub_second_resolution() {
        let mut clock = SimClock::new(0, 250);
        for _ in 0..5 {
            clock.advance();
        }
        assert_eq!(clock.current_unix_ms(), 1_250);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults_match_reference_deployment() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.vehicle_count, 500);
        assert_eq!(cfg.tick_interval_ms, 1_000);
        assert_eq!(cfg.alert_cooldown_secs, 30);
        assert_eq!(cfg.broadcast_chunk, 50);
        assert!((cfg.region.center_lat - (-26.20)).abs() < 1e-9);
        assert!((cfg.region.center_lng - 28.04).abs() < 1e-9);
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_degenerate_configs() {
        let mut cfg = SimConfig::default();
        cfg.vehicle_count = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.tick_interval_ms = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.broadcast_chunk = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn pinned_start_time_is_honored() {
        let cfg = SimConfig {
            start_unix_ms: Some(123_456),
            ..SimConfig::default()
        };
        assert_eq!(cfg.make_clock().start_unix_ms, 123_456);
    }

    #[test]
    fn cooldown_in_ms() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.cooldown_ms(), 30_000);
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, VehicleId, VehicleRng};

    #[test]
    fn same_seed_same_sequence() {
        let id = VehicleId::new("GP 001 AAA");
        let mut a = VehicleRng::new(7, &id);
        let mut b = VehicleRng::new(7, &id);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0.0..1.0f64), b.gen_range(0.0..1.0f64));
        }
    }

    #[test]
    fn different_plates_diverge() {
        let mut a = VehicleRng::new(7, &VehicleId::new("GP 001 AAA"));
        let mut b = VehicleRng::new(7, &VehicleId::new("GP 002 AAA"));
        let sa: f64 = (0..10).map(|_| a.gen_range(0.0..1.0f64)).sum();
        let sb: f64 = (0..10).map(|_| b.gen_range(0.0..1.0f64)).sum();
        assert_ne!(sa, sb);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(1);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped, not panicked on.
        assert!(rng.gen_bool(2.5));
    }
}

#[cfg(test)]
mod alert {
    use crate::{AlertKind, Severity};

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(AlertKind::Overspeed.to_string(), "OVERSPEED");
        assert_eq!(AlertKind::LowFuel.to_string(), "LOW_FUEL");
        assert_eq!(AlertKind::EngineOverheat.to_string(), "ENGINE_OVERHEAT");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn serde_names_are_screaming_snake() {
        let json = serde_json::to_string(&AlertKind::EngineOverheat).unwrap();
        assert_eq!(json, "\"ENGINE_OVERHEAT\"");
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
