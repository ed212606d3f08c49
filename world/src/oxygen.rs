//! Pausable oxygen meter that signals threshold crossings and depletion.

use std::time::Duration;

/// Monotonically draining resource owned by a single diver.
#[derive(Clone, Debug)]
pub(crate) struct OxygenMeter {
    capacity: f32,
    current: f32,
    base_drain_rate: f32,
    low_threshold: f32,
    running: bool,
    low: bool,
    modifier: Option<DrainModifier>,
}

/// Temporary scale applied to the base drain rate.
#[derive(Clone, Copy, Debug)]
struct DrainModifier {
    multiplier: f32,
    remaining: Duration,
}

/// Threshold crossings observed during a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct OxygenDelta {
    pub(crate) low: bool,
    pub(crate) normal: bool,
    pub(crate) depleted: bool,
}

impl OxygenMeter {
    pub(crate) fn new(capacity: f32, drain_rate: f32, low_threshold: f32) -> Self {
        Self {
            capacity,
            current: capacity,
            base_drain_rate: drain_rate,
            low_threshold,
            running: false,
            low: false,
            modifier: None,
        }
    }

    /// Resumes draining; a no-op while already running.
    pub(crate) fn start(&mut self) {
        self.running = true;
    }

    /// Halts draining; a no-op while already stopped.
    pub(crate) fn stop(&mut self) {
        self.running = false;
    }

    /// Restores full capacity and clears the low flag without restarting.
    pub(crate) fn refill(&mut self) {
        self.current = self.capacity;
        self.low = false;
    }

    /// Scales the drain rate for the duration. A re-application replaces the
    /// active modifier outright so repeated calls never compound; expiry
    /// restores the exact base rate.
    pub(crate) fn modify_drain_rate(&mut self, multiplier: f32, duration: Duration) {
        self.modifier = Some(DrainModifier {
            multiplier,
            remaining: duration,
        });
    }

    /// Drains the meter and reports every threshold crossed this tick.
    ///
    /// The modifier countdown advances whether or not the drain is running,
    /// matching its wall-clock behaviour in the source gameplay.
    pub(crate) fn tick(&mut self, dt: Duration) -> OxygenDelta {
        let mut delta = OxygenDelta::default();

        let rate = self.effective_drain_rate();
        if let Some(modifier) = self.modifier {
            let remaining = modifier.remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.modifier = None;
            } else {
                self.modifier = Some(DrainModifier {
                    multiplier: modifier.multiplier,
                    remaining,
                });
            }
        }

        if !self.running {
            return delta;
        }

        self.current = (self.current - rate * dt.as_secs_f32()).max(0.0);

        if self.current <= self.low_threshold && !self.low {
            self.low = true;
            delta.low = true;
        } else if self.current > self.low_threshold && self.low {
            self.low = false;
            delta.normal = true;
        }

        if self.current <= 0.0 {
            self.running = false;
            delta.depleted = true;
        }

        delta
    }

    pub(crate) fn current(&self) -> f32 {
        self.current
    }

    pub(crate) fn capacity(&self) -> f32 {
        self.capacity
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn is_low(&self) -> bool {
        self.low
    }

    fn effective_drain_rate(&self) -> f32 {
        match self.modifier {
            Some(modifier) => self.base_drain_rate * modifier.multiplier,
            None => self.base_drain_rate,
        }
    }
}
