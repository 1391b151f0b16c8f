//! Simulation clock fed by the external tick driver

use serde::{Deserialize, Serialize};

/// Tracks the latest observed instant and how many fixed maintenance steps
/// are due. Instants are simulation seconds chosen by the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickClock {
    now: f64,
    last_maintenance_step: f64,
}

impl TickClock {
    pub fn starting_at(now: f64) -> Self {
        Self {
            now,
            last_maintenance_step: now,
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Record a tick instant. The clock never runs backwards.
    pub fn observe(&mut self, now: f64) -> f64 {
        if now > self.now {
            self.now = now;
        }
        self.now
    }

    /// Number of whole maintenance steps elapsed since the last call.
    ///
    /// A late tick returns every step it owes; the remainder carries over.
    pub fn due_steps(&mut self, step_secs: f64) -> u64 {
        if !(step_secs > 0.0) {
            return 0;
        }
        let elapsed = self.now - self.last_maintenance_step;
        if elapsed < step_secs {
            return 0;
        }
        let steps = (elapsed / step_secs).floor() as u64;
        self.last_maintenance_step += steps as f64 * step_secs;
        steps
    }
}
