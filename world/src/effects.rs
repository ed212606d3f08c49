//! Timed speed-modifier state for a single diver.
//!
//! Three modifiers combine into one effective multiplier: a boost above 1.0,
//! an impairment below 1.0, and an environmental slow layered under the
//! impairment. Boost and impairment replace their predecessors outright; the
//! slow takes the more restrictive value and restores the snapshot it captured
//! when it expires. The impairment path and the slow path deliberately revert
//! differently, matching the observed gameplay.

use std::time::Duration;

/// Countdown state for the boost/impairment/slow modifier set.
#[derive(Clone, Debug)]
pub(crate) struct StatusEffects {
    max_boost: f32,
    impairment_floor: f32,
    boost_multiplier: f32,
    boost_remaining: Option<Duration>,
    impairment_multiplier: f32,
    impairment_remaining: Option<Duration>,
    slow: Option<SlowOverlay>,
}

/// Environmental slow that remembers the multiplier it displaced.
#[derive(Clone, Copy, Debug)]
struct SlowOverlay {
    restore_to: f32,
    remaining: Duration,
}

/// Which modifiers expired during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct EffectExpiry {
    pub(crate) boost: bool,
    pub(crate) impairment: bool,
    pub(crate) slow: bool,
}

impl StatusEffects {
    pub(crate) fn new(max_boost: f32, impairment_floor: f32) -> Self {
        Self {
            max_boost,
            impairment_floor,
            boost_multiplier: 1.0,
            boost_remaining: None,
            impairment_multiplier: 1.0,
            impairment_remaining: None,
            slow: None,
        }
    }

    /// Replaces any active boost and returns the capped multiplier in effect.
    pub(crate) fn apply_boost(&mut self, multiplier: f32, duration: Duration) -> f32 {
        self.boost_multiplier = multiplier.min(self.max_boost);
        self.boost_remaining = Some(duration);
        self.boost_multiplier
    }

    /// Replaces any active impairment and returns the floored multiplier in effect.
    ///
    /// An active slow keeps the restore snapshot it captured earlier; only the
    /// impairment countdown restarts.
    pub(crate) fn apply_impairment(&mut self, multiplier: f32, duration: Duration) -> f32 {
        self.impairment_multiplier = multiplier.max(self.impairment_floor);
        self.impairment_remaining = Some(duration);
        self.impairment_multiplier
    }

    /// Layers an environmental slow under the impairment; the more restrictive
    /// multiplier wins. Returns the combined impairment value in effect.
    ///
    /// A second slow keeps the first slow's restore snapshot and restarts the
    /// countdown with the new duration.
    pub(crate) fn apply_slow(&mut self, multiplier: f32, duration: Duration) -> f32 {
        let restore_to = match self.slow {
            Some(overlay) => overlay.restore_to,
            None => self.impairment_multiplier,
        };
        self.impairment_multiplier = self.impairment_multiplier.min(multiplier);
        self.slow = Some(SlowOverlay {
            restore_to,
            remaining: duration,
        });
        self.impairment_multiplier
    }

    /// Advances every countdown, reverting modifiers whose time ran out.
    pub(crate) fn tick(&mut self, dt: Duration) -> EffectExpiry {
        let mut expiry = EffectExpiry::default();

        if let Some(remaining) = self.boost_remaining {
            let remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.boost_multiplier = 1.0;
                self.boost_remaining = None;
                expiry.boost = true;
            } else {
                self.boost_remaining = Some(remaining);
            }
        }

        if let Some(remaining) = self.impairment_remaining {
            let remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                // Resets the combined value even while a slow is pending.
                self.impairment_multiplier = 1.0;
                self.impairment_remaining = None;
                expiry.impairment = true;
            } else {
                self.impairment_remaining = Some(remaining);
            }
        }

        if let Some(overlay) = self.slow {
            let remaining = overlay.remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.impairment_multiplier = overlay.restore_to;
                self.slow = None;
                expiry.slow = true;
            } else {
                self.slow = Some(SlowOverlay {
                    restore_to: overlay.restore_to,
                    remaining,
                });
            }
        }

        expiry
    }

    /// Cancels every pending countdown and restores the neutral multiplier.
    pub(crate) fn reset(&mut self) {
        self.boost_multiplier = 1.0;
        self.boost_remaining = None;
        self.impairment_multiplier = 1.0;
        self.impairment_remaining = None;
        self.slow = None;
    }

    pub(crate) fn boost_multiplier(&self) -> f32 {
        self.boost_multiplier
    }

    pub(crate) fn impairment_multiplier(&self) -> f32 {
        self.impairment_multiplier
    }

    /// Combined multiplier consumed by movement integration.
    pub(crate) fn effective_multiplier(&self) -> f32 {
        self.boost_multiplier * self.impairment_multiplier
    }
}
