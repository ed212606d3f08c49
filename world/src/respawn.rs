//! Death-and-respawn sequencing for a single diver.
//!
//! The cycle is `Alive -> Dying -> GhostTransit -> Reviving -> Alive`. Dying
//! holds the diver at the death position for a configured beat, ghost transit
//! drifts it along a quadratic curve back to the spawn point at a configured
//! speed, and the reviving tail hands control back to the world so effects and
//! oxygen can be restored before the phase returns to `Alive`.

use std::time::Duration;

use deeptide_core::{RespawnPhase, WorldPosition};

/// State machine driving one diver through the respawn cycle.
#[derive(Clone, Debug)]
pub(crate) struct RespawnSequence {
    phase: RespawnPhase,
    dying_hold: Duration,
    ghost_speed: f32,
    curve_height: f32,
    dying_remaining: Duration,
    transit: Option<Transit>,
}

#[derive(Clone, Copy, Debug)]
struct Transit {
    start: WorldPosition,
    control: WorldPosition,
    end: WorldPosition,
    elapsed: Duration,
    duration: Duration,
}

/// Outcome of advancing the sequence by one tick.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RespawnProgress {
    /// Position the world should place the diver at, when the sequence owns it.
    pub(crate) position: Option<WorldPosition>,
    /// Set on the tick the diver arrives; the world restores state and calls
    /// [`RespawnSequence::complete`].
    pub(crate) arrived: bool,
}

impl RespawnSequence {
    pub(crate) fn new(dying_hold: Duration, ghost_speed: f32, curve_height: f32) -> Self {
        Self {
            phase: RespawnPhase::Alive,
            dying_hold,
            ghost_speed,
            curve_height,
            dying_remaining: Duration::ZERO,
            transit: None,
        }
    }

    pub(crate) fn phase(&self) -> RespawnPhase {
        self.phase
    }

    /// True only while the diver is alive and may move, drain, and die.
    pub(crate) fn has_respawned(&self) -> bool {
        self.phase == RespawnPhase::Alive
    }

    /// Begins the cycle from the death position. Returns false (and changes
    /// nothing) unless the diver is alive, which silently absorbs re-entrant
    /// death triggers. A missing spawn point degrades to a transit that ends
    /// where it began.
    pub(crate) fn trigger_death(
        &mut self,
        death_position: WorldPosition,
        spawn_point: Option<WorldPosition>,
    ) -> bool {
        if self.phase != RespawnPhase::Alive {
            return false;
        }

        let end = spawn_point.unwrap_or(death_position);
        let midpoint = WorldPosition::new(
            (death_position.x() + end.x()) / 2.0,
            (death_position.y() + end.y()) / 2.0,
        );
        let control = WorldPosition::new(midpoint.x(), midpoint.y() + self.curve_height);
        let distance = death_position.distance(end);
        let duration = if self.ghost_speed > 0.0 {
            Duration::from_secs_f32(distance / self.ghost_speed)
        } else {
            Duration::ZERO
        };

        self.phase = RespawnPhase::Dying;
        self.dying_remaining = self.dying_hold;
        self.transit = Some(Transit {
            start: death_position,
            control,
            end,
            elapsed: Duration::ZERO,
            duration,
        });
        true
    }

    /// Advances the sequence, carrying leftover time across phase boundaries
    /// so a large tick cannot stall the cycle.
    pub(crate) fn tick(&mut self, dt: Duration) -> RespawnProgress {
        let mut progress = RespawnProgress::default();
        let mut budget = dt;

        if self.phase == RespawnPhase::Dying {
            if budget < self.dying_remaining {
                self.dying_remaining -= budget;
                return progress;
            }
            budget -= self.dying_remaining;
            self.dying_remaining = Duration::ZERO;
            self.phase = RespawnPhase::GhostTransit;
        }

        if self.phase == RespawnPhase::GhostTransit {
            let Some(transit) = self.transit.as_mut() else {
                self.phase = RespawnPhase::Reviving;
                progress.arrived = true;
                return progress;
            };

            transit.elapsed = transit.elapsed.saturating_add(budget);
            if transit.elapsed >= transit.duration {
                progress.position = Some(transit.end);
                progress.arrived = true;
                self.phase = RespawnPhase::Reviving;
            } else {
                let t = transit.elapsed.as_secs_f32() / transit.duration.as_secs_f32();
                progress.position = Some(curve_point(
                    transit.start,
                    transit.control,
                    transit.end,
                    t,
                ));
            }
        }

        progress
    }

    /// Returns the spawn-side endpoint of the active transit, if any.
    pub(crate) fn transit_target(&self) -> Option<WorldPosition> {
        self.transit.map(|transit| transit.end)
    }

    /// Finalizes the reviving tail once the world restored the diver's state.
    pub(crate) fn complete(&mut self) {
        self.transit = None;
        self.phase = RespawnPhase::Alive;
    }
}

/// Quadratic Bezier interpolation between the death and spawn positions.
fn curve_point(
    start: WorldPosition,
    control: WorldPosition,
    end: WorldPosition,
    t: f32,
) -> WorldPosition {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    WorldPosition::new(
        uu * start.x() + 2.0 * u * t * control.x() + tt * end.x(),
        uu * start.y() + 2.0 * u * t * control.y() + tt * end.y(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> RespawnSequence {
        RespawnSequence::new(Duration::from_millis(500), 3.0, 2.0)
    }

    #[test]
    fn death_trigger_only_accepted_while_alive() {
        let mut sequence = sequence();
        let death = WorldPosition::new(6.0, -1.0);
        let spawn = Some(WorldPosition::new(0.0, 2.0));

        assert!(sequence.trigger_death(death, spawn));
        assert_eq!(sequence.phase(), RespawnPhase::Dying);
        assert!(!sequence.trigger_death(death, spawn));
        assert_eq!(sequence.phase(), RespawnPhase::Dying);
    }

    #[test]
    fn dying_holds_before_transit_begins() {
        let mut sequence = sequence();
        assert!(sequence.trigger_death(
            WorldPosition::new(3.0, 0.0),
            Some(WorldPosition::new(0.0, 0.0)),
        ));

        let progress = sequence.tick(Duration::from_millis(250));
        assert!(progress.position.is_none());
        assert_eq!(sequence.phase(), RespawnPhase::Dying);

        let progress = sequence.tick(Duration::from_millis(250));
        assert_eq!(sequence.phase(), RespawnPhase::GhostTransit);
        assert!(progress.position.is_some());
    }

    #[test]
    fn transit_arrives_at_spawn_after_distance_over_speed() {
        let mut sequence = sequence();
        let spawn = WorldPosition::new(0.0, 2.0);
        assert!(sequence.trigger_death(WorldPosition::new(6.0, 2.0), Some(spawn)));

        // 0.5s dying hold plus 6.0 units at 3.0 units per second.
        let mut arrived = false;
        let mut final_position = None;
        for _ in 0..26 {
            let progress = sequence.tick(Duration::from_millis(100));
            if let Some(position) = progress.position {
                final_position = Some(position);
            }
            if progress.arrived {
                arrived = true;
                break;
            }
        }

        assert!(arrived);
        assert_eq!(sequence.phase(), RespawnPhase::Reviving);
        let position = final_position.expect("transit reported positions");
        assert!((position.x() - spawn.x()).abs() < 1e-4);
        assert!((position.y() - spawn.y()).abs() < 1e-4);

        sequence.complete();
        assert!(sequence.has_respawned());
    }

    #[test]
    fn transit_curve_rises_above_the_straight_line() {
        let mut sequence = sequence();
        assert!(sequence.trigger_death(
            WorldPosition::new(6.0, 0.0),
            Some(WorldPosition::new(0.0, 0.0)),
        ));

        let _ = sequence.tick(Duration::from_millis(500));
        let progress = sequence.tick(Duration::from_millis(1000));
        let midway = progress.position.expect("transit owns the position");
        assert!(midway.y() > 0.1, "curved path should lift the ghost");
    }

    #[test]
    fn missing_spawn_point_falls_back_to_death_position() {
        let mut sequence = sequence();
        let death = WorldPosition::new(4.0, -2.0);
        assert!(sequence.trigger_death(death, None));
        assert_eq!(sequence.transit_target(), Some(death));

        // Zero-length transit still runs the full cycle.
        let progress = sequence.tick(Duration::from_millis(500));
        assert!(progress.arrived);
        assert_eq!(progress.position, Some(death));
    }

    #[test]
    fn oversized_tick_carries_into_transit() {
        let mut sequence = sequence();
        assert!(sequence.trigger_death(
            WorldPosition::new(3.0, 0.0),
            Some(WorldPosition::new(0.0, 0.0)),
        ));

        // 2.0s covers the 0.5s hold plus the full 1.0s transit.
        let progress = sequence.tick(Duration::from_secs(2));
        assert!(progress.arrived);
        assert_eq!(sequence.phase(), RespawnPhase::Reviving);
    }
}
