#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic pursuit system that steers the hunter toward living divers.
//!
//! The hunter only acts on divers whose respawn cycle reports them alive;
//! while every diver is mid-respawn it holds position, and a completed
//! respawn sends it back to its lurk position so the revived diver gets a
//! head start.

use std::time::Duration;

use deeptide_core::{Command, Event, SwimVector, WorldPosition};
use deeptide_world::query::DiverView;

/// Configuration parameters required to construct the pursuit system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Baseline chase speed in world units per second.
    pub chase_speed: f32,
    /// Distance at which the hunter stops chasing and kills.
    pub attack_range: f32,
    /// Inside this distance the hunter eases off to give the diver a chance.
    pub near_distance: f32,
    /// Beyond this distance the hunter hurries to catch up.
    pub far_distance: f32,
    /// Speed factor applied beyond `far_distance`.
    pub far_speed_multiplier: f32,
    /// Speed factor applied inside `near_distance`.
    pub near_speed_multiplier: f32,
    /// Position the hunter retreats to after a completed respawn.
    pub lurk_position: WorldPosition,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chase_speed: 4.0,
            attack_range: 1.5,
            near_distance: 3.0,
            far_distance: 10.0,
            far_speed_multiplier: 1.5,
            near_speed_multiplier: 0.5,
            lurk_position: WorldPosition::new(0.0, -3.0),
        }
    }
}

/// Pure system that reacts to world events and emits hunter commands.
#[derive(Debug, Default)]
pub struct Pursuit {
    config: Config,
}

impl Pursuit {
    /// Creates a new pursuit system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Consumes world events and immutable views to emit hunter commands.
    pub fn handle(
        &self,
        events: &[Event],
        diver_view: &DiverView,
        hunter_position: WorldPosition,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            if matches!(event, Event::RespawnCompleted { .. }) {
                out.push(Command::MoveHunter {
                    position: self.config.lurk_position,
                });
                return;
            }
        }

        let mut elapsed = Duration::ZERO;
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                elapsed = elapsed.saturating_add(*dt);
            }
        }
        if elapsed.is_zero() {
            return;
        }

        let Some(target) = nearest_living_diver(diver_view, hunter_position) else {
            return;
        };

        let distance = hunter_position.distance(target.position);
        if distance <= self.config.attack_range {
            out.push(Command::TriggerDeath { diver: target.id });
            return;
        }

        let step = self.config.chase_speed
            * self.speed_multiplier(distance)
            * elapsed.as_secs_f32();
        let direction = SwimVector::between(hunter_position, target.position);
        let position = hunter_position.offset(direction, step.min(distance));
        out.push(Command::MoveHunter { position });
    }

    fn speed_multiplier(&self, distance: f32) -> f32 {
        if distance > self.config.far_distance {
            self.config.far_speed_multiplier
        } else if distance < self.config.near_distance {
            self.config.near_speed_multiplier
        } else {
            1.0
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct PursuitTarget {
    id: deeptide_core::DiverId,
    position: WorldPosition,
}

fn nearest_living_diver(
    diver_view: &DiverView,
    hunter_position: WorldPosition,
) -> Option<PursuitTarget> {
    let mut nearest: Option<(f32, PursuitTarget)> = None;
    for diver in diver_view.iter() {
        if !diver.has_respawned {
            continue;
        }
        let distance = hunter_position.distance(diver.position);
        let closer = match nearest {
            None => true,
            Some((best, _)) => distance < best,
        };
        if closer {
            nearest = Some((
                distance,
                PursuitTarget {
                    id: diver.id,
                    position: diver.position,
                },
            ));
        }
    }
    nearest.map(|(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_scales_with_distance_bands() {
        let pursuit = Pursuit::default();
        assert!((pursuit.speed_multiplier(20.0) - 1.5).abs() < f32::EPSILON);
        assert!((pursuit.speed_multiplier(5.0) - 1.0).abs() < f32::EPSILON);
        assert!((pursuit.speed_multiplier(2.0) - 0.5).abs() < f32::EPSILON);
    }
}
