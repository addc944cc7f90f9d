//! Alarm sink implementations

use tracing::{info, warn};

/// Receives the drowsy flag once per frame.
///
/// The monitor does not deduplicate calls; implementations see the same
/// value on every frame while the state holds and must stay idempotent.
pub trait AlarmSink {
    fn set_active(&mut self, active: bool);
}

/// Sink that logs alarm transitions and swallows repeats
#[derive(Debug, Default)]
pub struct TracingAlarmSink {
    active: bool,
}

impl TracingAlarmSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl AlarmSink for TracingAlarmSink {
    fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        if active {
            warn!("drowsiness alarm engaged");
        } else {
            info!("drowsiness alarm cleared");
        }
    }
}

/// No-op sink for headless runs
#[derive(Debug, Default)]
pub struct NullAlarmSink;

impl AlarmSink for NullAlarmSink {
    fn set_active(&mut self, _active: bool) {}
}
