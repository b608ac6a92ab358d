//! JSON-lines broadcast feed.
//!
//! Serializes each outgoing message as one JSON object per line, enveloped
//! with the topic it would be published under:
//!
//! ```text
//! {"topic":"vehicles","data":[{...},{...}]}
//! {"topic":"alerts","data":{...}}
//! ```
//!
//! The writer is wrapped in a mutex because `BroadcastSink` takes `&self`;
//! the alerts toggle is an atomic so a control surface can flip it from
//! another thread mid-run.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use serde::Serialize;

use fleet_core::{Alert, TelemetrySnapshot};
use fleet_sim::{BroadcastSink, SinkError};

use crate::OutputResult;

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    topic: &'static str,
    data:  &'a T,
}

/// Publishes telemetry batches and alerts as JSON lines to any `Write`.
pub struct JsonFeed<W: Write> {
    out:            Mutex<W>,
    alerts_enabled: AtomicBool,
}

impl<W: Write> JsonFeed<W> {
    pub fn new(out: W) -> Self {
        Self {
            out:            Mutex::new(out),
            alerts_enabled: AtomicBool::new(true),
        }
    }

    /// Enable or disable alert publishing.  Telemetry is unaffected.
    pub fn set_alerts_enabled(&self, enabled: bool) {
        self.alerts_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_alerts_enabled(&self) -> bool {
        self.alerts_enabled.load(Ordering::SeqCst)
    }

    /// Unwrap the feed and hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn publish<T: Serialize>(&self, topic: &'static str, data: &T) -> OutputResult<()> {
        let line = serde_json::to_vec(&Envelope { topic, data })?;
        let mut out = self.out.lock();
        out.write_all(&line)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> BroadcastSink for JsonFeed<W> {
    fn telemetry_batch(&self, batch: &[TelemetrySnapshot]) -> Result<(), SinkError> {
        Ok(self.publish("vehicles", &batch)?)
    }

    fn alert(&self, alert: &Alert) -> Result<(), SinkError> {
        Ok(self.publish("alerts", alert)?)
    }

    fn alerts_enabled(&self) -> bool {
        self.is_alerts_enabled()
    }
}
