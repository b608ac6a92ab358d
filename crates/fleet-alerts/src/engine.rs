//! The alert engine.

use fleet_core::{Alert, TelemetrySnapshot};

use crate::cooldown::CooldownTable;
use crate::rules::{AlertRule, DEFAULT_RULES};

/// Evaluates telemetry snapshots against the rule table, suppressing
/// duplicates via the cooldown table.
///
/// Takes `&self` everywhere: the only mutable state is the cooldown table,
/// which synchronizes internally, so one engine can serve a parallelized
/// per-vehicle loop.
pub struct AlertEngine {
    rules:       &'static [AlertRule],
    cooldown:    CooldownTable,
    cooldown_ms: i64,
}

impl AlertEngine {
    /// Engine with the stock rule table and the given cooldown window.
    pub fn new(cooldown_ms: i64) -> Self {
        Self::with_rules(DEFAULT_RULES, cooldown_ms)
    }

    /// Engine with a custom rule table.
    pub fn with_rules(rules: &'static [AlertRule], cooldown_ms: i64) -> Self {
        Self {
            rules,
            cooldown: CooldownTable::new(),
            cooldown_ms,
        }
    }

    /// Evaluate one snapshot.  Each rule is checked independently, so a
    /// single snapshot can yield up to one alert per rule.
    ///
    /// The snapshot's own timestamp is the evaluation instant: it stamps the
    /// emitted alerts and drives the cooldown arithmetic.  The cooldown is
    /// per alert kind, not per severity tier — a vehicle escalating from
    /// warning to critical inside an open window stays suppressed.
    pub fn evaluate(&self, snapshot: &TelemetrySnapshot) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for rule in self.rules {
            let value = (rule.metric)(snapshot);
            let Some(severity) = rule.breached(value) else {
                continue;
            };
            if !self.cooldown.try_acquire(
                &snapshot.vehicle,
                rule.kind,
                snapshot.unix_time_ms,
                self.cooldown_ms,
            ) {
                continue;
            }
            alerts.push(Alert {
                vehicle:      snapshot.vehicle.clone(),
                kind:         rule.kind,
                severity,
                message:      (rule.message)(snapshot, value),
                unix_time_ms: snapshot.unix_time_ms,
            });
        }
        alerts
    }

    /// Read access to the cooldown table (tests, diagnostics).
    pub fn cooldown(&self) -> &CooldownTable {
        &self.cooldown
    }
}
