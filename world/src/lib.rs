#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Deeptide.
//!
//! The world owns every diver's status-effect, oxygen, and respawn state, the
//! hunter's position, and the live pickups. All mutation flows through
//! [`apply`], which executes a single [`Command`] and appends the resulting
//! [`Event`] values to the caller's buffer in deterministic order.

mod effects;
mod oxygen;
mod respawn;

use std::time::Duration;

use deeptide_core::{
    Command, DiverId, EffectKind, Event, PickupId, PickupKind, SwimVector, WorldPosition,
    WELCOME_BANNER,
};

use effects::StatusEffects;
use oxygen::OxygenMeter;
use respawn::RespawnSequence;

const DEFAULT_START: WorldPosition = WorldPosition::new(0.0, 2.0);

/// Tuning knobs for the simulation; every gameplay constant lives here rather
/// than inline in the update code.
#[derive(Clone, Copy, Debug)]
pub struct WorldConfig {
    /// Position divers revive at; `None` degrades death transits to their
    /// death position.
    pub spawn_position: Option<WorldPosition>,
    /// Upper cap applied to every requested boost multiplier.
    pub max_boost_multiplier: f32,
    /// Safety floor applied to every requested impairment multiplier, so a
    /// diver is never fully immobilized.
    pub impairment_floor: f32,
    /// Oxygen a diver carries when full.
    pub oxygen_capacity: f32,
    /// Oxygen drained per second while the meter runs.
    pub oxygen_drain_rate: f32,
    /// Remaining oxygen at which the low warning fires.
    pub oxygen_low_threshold: f32,
    /// Base swim speed in world units per second before modifiers.
    pub swim_speed: f32,
    /// Hold at the death position before ghost transit begins.
    pub dying_hold: Duration,
    /// Ghost drift speed in world units per second.
    pub ghost_speed: f32,
    /// Vertical lift of the transit curve's control point.
    pub ghost_curve_height: f32,
    /// Distance within which a diver collects a pickup.
    pub pickup_radius: f32,
    /// Effect granted by boost pickups.
    pub boost_pickup: PickupEffect,
    /// Effect granted by poison pickups.
    pub poison_pickup: PickupEffect,
    /// Position the hunter starts lurking at.
    pub hunter_start: WorldPosition,
}

/// Multiplier and duration pair granted by a pickup kind.
#[derive(Clone, Copy, Debug)]
pub struct PickupEffect {
    /// Speed multiplier requested when the pickup is collected.
    pub multiplier: f32,
    /// Time until the granted effect reverts.
    pub duration: Duration,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            spawn_position: Some(DEFAULT_START),
            max_boost_multiplier: 3.0,
            impairment_floor: 0.6,
            oxygen_capacity: 100.0,
            oxygen_drain_rate: 15.0,
            oxygen_low_threshold: 30.0,
            swim_speed: 8.0,
            dying_hold: Duration::from_millis(500),
            ghost_speed: 3.0,
            ghost_curve_height: 2.0,
            pickup_radius: 0.75,
            boost_pickup: PickupEffect {
                multiplier: 1.8,
                duration: Duration::from_secs(4),
            },
            poison_pickup: PickupEffect {
                multiplier: 0.5,
                duration: Duration::from_secs(3),
            },
            hunter_start: WorldPosition::new(0.0, -3.0),
        }
    }
}

/// Represents the authoritative Deeptide world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: WorldConfig,
    divers: Vec<Diver>,
    hunter: Hunter,
    pickups: Vec<Pickup>,
    next_pickup: u32,
}

impl World {
    /// Creates a new world with the default configuration and a single diver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Creates a new world tuned by the provided configuration.
    #[must_use]
    pub fn with_config(config: WorldConfig) -> Self {
        let diver = Diver::new(DiverId::new(0), &config);
        Self {
            banner: WELCOME_BANNER,
            divers: vec![diver],
            hunter: Hunter {
                position: config.hunter_start,
            },
            pickups: Vec::new(),
            next_pickup: 0,
            config,
        }
    }

    fn diver_mut(&mut self, diver_id: DiverId) -> Option<&mut Diver> {
        self.divers.iter_mut().find(|diver| diver.id == diver_id)
    }

    fn advance_time(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        out_events.push(Event::TimeAdvanced { dt });

        let swim_speed = self.config.swim_speed;
        for index in 0..self.divers.len() {
            let diver = &mut self.divers[index];
            let diver_id = diver.id;

            let expiry = diver.effects.tick(dt);
            if expiry.boost {
                out_events.push(Event::EffectExpired {
                    diver: diver_id,
                    kind: EffectKind::Boost,
                });
            }
            if expiry.impairment {
                out_events.push(Event::EffectExpired {
                    diver: diver_id,
                    kind: EffectKind::Impairment,
                });
            }
            if expiry.slow {
                out_events.push(Event::EffectExpired {
                    diver: diver_id,
                    kind: EffectKind::Slow,
                });
            }

            let delta = diver.oxygen.tick(dt);
            if delta.low {
                out_events.push(Event::OxygenLow { diver: diver_id });
            }
            if delta.normal {
                out_events.push(Event::OxygenNormal { diver: diver_id });
            }
            if delta.depleted {
                out_events.push(Event::OxygenDepleted { diver: diver_id });
                // Depletion is observed by the respawn sequence within the
                // same tick, never queued across ticks.
                self.kill_diver_at(index, out_events);
            }

            let diver = &mut self.divers[index];
            if diver.respawn.has_respawned() {
                let step = swim_speed * diver.effects.effective_multiplier() * dt.as_secs_f32();
                diver.position = diver.position.offset(diver.steer, step);
            } else {
                let progress = diver.respawn.tick(dt);
                if let Some(position) = progress.position {
                    diver.position = position;
                }
                if progress.arrived {
                    self.revive_diver(index, out_events);
                }
            }
        }

        self.collect_pickups(out_events);
    }

    fn kill_diver_at(&mut self, index: usize, out_events: &mut Vec<Event>) {
        let spawn_point = self.divers[index].spawn_point;
        let diver = &mut self.divers[index];
        let position = diver.position;
        if !diver.respawn.trigger_death(position, spawn_point) {
            return;
        }

        diver.oxygen.stop();
        diver.steer = SwimVector::ZERO;
        out_events.push(Event::DiverDied {
            diver: diver.id,
            position,
        });
        out_events.push(Event::RespawnStarted { diver: diver.id });
    }

    fn revive_diver(&mut self, index: usize, out_events: &mut Vec<Event>) {
        let diver = &mut self.divers[index];
        if let Some(target) = diver.respawn.transit_target() {
            diver.position = target;
        }
        diver.steer = SwimVector::ZERO;
        diver.effects.reset();
        diver.oxygen.refill();
        diver.oxygen.start();
        diver.respawn.complete();
        out_events.push(Event::RespawnCompleted { diver: diver.id });
    }

    fn collect_pickups(&mut self, out_events: &mut Vec<Event>) {
        let radius = self.config.pickup_radius;
        let boost = self.config.boost_pickup;
        let poison = self.config.poison_pickup;

        let mut collected: Vec<(usize, usize)> = Vec::new();
        for (diver_index, diver) in self.divers.iter().enumerate() {
            if !diver.respawn.has_respawned() {
                continue;
            }
            for (pickup_index, pickup) in self.pickups.iter().enumerate() {
                let already_taken = collected.iter().any(|(_, taken)| *taken == pickup_index);
                if !already_taken && diver.position.distance(pickup.position) <= radius {
                    collected.push((diver_index, pickup_index));
                }
            }
        }

        // Remove back to front so earlier indices stay valid.
        collected.sort_by_key(|(_, pickup_index)| std::cmp::Reverse(*pickup_index));
        for (diver_index, pickup_index) in collected {
            let pickup = self.pickups.remove(pickup_index);
            let diver = &mut self.divers[diver_index];
            out_events.push(Event::PickupCollected {
                pickup: pickup.id,
                diver: diver.id,
                kind: pickup.kind,
            });
            match pickup.kind {
                PickupKind::Boost => {
                    let applied = diver.effects.apply_boost(boost.multiplier, boost.duration);
                    out_events.push(Event::BoostApplied {
                        diver: diver.id,
                        multiplier: applied,
                        duration: boost.duration,
                    });
                }
                PickupKind::Poison => {
                    let applied = diver
                        .effects
                        .apply_impairment(poison.multiplier, poison.duration);
                    out_events.push(Event::ImpairmentApplied {
                        diver: diver.id,
                        multiplier: applied,
                        duration: poison.duration,
                    });
                }
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => world.advance_time(dt, out_events),
        Command::Steer { diver, direction } => {
            if let Some(diver) = world.diver_mut(diver) {
                diver.steer = if direction.magnitude() > 1.0 {
                    direction.normalized()
                } else {
                    direction
                };
            }
        }
        Command::ApplyBoost {
            diver,
            multiplier,
            duration,
        } => {
            if let Some(entry) = world.diver_mut(diver) {
                let applied = entry.effects.apply_boost(multiplier, duration);
                out_events.push(Event::BoostApplied {
                    diver,
                    multiplier: applied,
                    duration,
                });
            }
        }
        Command::ApplyImpairment {
            diver,
            multiplier,
            duration,
        } => {
            if let Some(entry) = world.diver_mut(diver) {
                let applied = entry.effects.apply_impairment(multiplier, duration);
                out_events.push(Event::ImpairmentApplied {
                    diver,
                    multiplier: applied,
                    duration,
                });
            }
        }
        Command::ApplySlow {
            diver,
            multiplier,
            duration,
        } => {
            if let Some(entry) = world.diver_mut(diver) {
                let applied = entry.effects.apply_slow(multiplier, duration);
                out_events.push(Event::SlowApplied {
                    diver,
                    multiplier: applied,
                    duration,
                });
            }
        }
        Command::ModifyOxygenDrain {
            diver,
            multiplier,
            duration,
        } => {
            if let Some(entry) = world.diver_mut(diver) {
                entry.oxygen.modify_drain_rate(multiplier, duration);
            }
        }
        Command::StartOxygen { diver } => {
            if let Some(entry) = world.diver_mut(diver) {
                entry.oxygen.start();
            }
        }
        Command::StopOxygen { diver } => {
            if let Some(entry) = world.diver_mut(diver) {
                entry.oxygen.stop();
            }
        }
        Command::RefillOxygen { diver } => {
            if let Some(entry) = world.diver_mut(diver) {
                entry.oxygen.refill();
            }
        }
        Command::TriggerDeath { diver } => {
            if let Some(index) = world.divers.iter().position(|entry| entry.id == diver) {
                world.kill_diver_at(index, out_events);
            }
        }
        Command::SetSpawnPoint { diver, position } => {
            if let Some(entry) = world.diver_mut(diver) {
                entry.spawn_point = Some(position);
            }
        }
        Command::SpawnPickup { position, kind } => {
            let id = PickupId::new(world.next_pickup);
            world.next_pickup = world.next_pickup.wrapping_add(1);
            world.pickups.push(Pickup { id, position, kind });
            out_events.push(Event::PickupSpawned {
                pickup: id,
                position,
                kind,
            });
        }
        Command::MoveHunter { position } => {
            world.hunter.position = position;
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use deeptide_core::{DiverId, PickupId, PickupKind, RespawnPhase, WorldPosition};

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Captures a read-only view of the divers inhabiting the water column.
    #[must_use]
    pub fn diver_view(world: &World) -> DiverView {
        let mut snapshots: Vec<DiverSnapshot> = world
            .divers
            .iter()
            .map(|diver| DiverSnapshot {
                id: diver.id,
                position: diver.position,
                phase: diver.respawn.phase(),
                has_respawned: diver.respawn.has_respawned(),
                boost_multiplier: diver.effects.boost_multiplier(),
                impairment_multiplier: diver.effects.impairment_multiplier(),
                effective_multiplier: diver.effects.effective_multiplier(),
                oxygen_current: diver.oxygen.current(),
                oxygen_capacity: diver.oxygen.capacity(),
                oxygen_low: diver.oxygen.is_low(),
                oxygen_running: diver.oxygen.is_running(),
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        DiverView { snapshots }
    }

    /// Current position of the hunter.
    #[must_use]
    pub fn hunter_position(world: &World) -> WorldPosition {
        world.hunter.position
    }

    /// Captures a read-only view of the live pickups in id order.
    #[must_use]
    pub fn pickup_view(world: &World) -> Vec<PickupSnapshot> {
        let mut snapshots: Vec<PickupSnapshot> = world
            .pickups
            .iter()
            .map(|pickup| PickupSnapshot {
                id: pickup.id,
                position: pickup.position,
                kind: pickup.kind,
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        snapshots
    }

    /// Read-only snapshot describing all divers.
    #[derive(Clone, Debug)]
    pub struct DiverView {
        snapshots: Vec<DiverSnapshot>,
    }

    impl DiverView {
        /// Iterator over the captured diver snapshots in deterministic order.
        pub fn iter(&self) -> impl Iterator<Item = &DiverSnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<DiverSnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single diver's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct DiverSnapshot {
        /// Unique identifier assigned to the diver.
        pub id: DiverId,
        /// Current position, whether swimming or mid-transit.
        pub position: WorldPosition,
        /// Phase of the respawn cycle.
        pub phase: RespawnPhase,
        /// True only while the diver is alive; gates pursuit collaborators.
        pub has_respawned: bool,
        /// Boost component of the speed multiplier.
        pub boost_multiplier: f32,
        /// Combined impairment component of the speed multiplier.
        pub impairment_multiplier: f32,
        /// Product consumed by movement each tick.
        pub effective_multiplier: f32,
        /// Oxygen remaining.
        pub oxygen_current: f32,
        /// Oxygen held when full.
        pub oxygen_capacity: f32,
        /// Whether the low warning is active.
        pub oxygen_low: bool,
        /// Whether the drain is running.
        pub oxygen_running: bool,
    }

    /// Immutable representation of a single pickup.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct PickupSnapshot {
        /// Identifier assigned at spawn.
        pub id: PickupId,
        /// Location the pickup floats at.
        pub position: WorldPosition,
        /// Effect granted on collection.
        pub kind: PickupKind,
    }
}

#[derive(Debug)]
struct Diver {
    id: DiverId,
    position: WorldPosition,
    steer: SwimVector,
    spawn_point: Option<WorldPosition>,
    effects: StatusEffects,
    oxygen: OxygenMeter,
    respawn: RespawnSequence,
}

impl Diver {
    fn new(id: DiverId, config: &WorldConfig) -> Self {
        Self {
            id,
            position: config.spawn_position.unwrap_or(DEFAULT_START),
            steer: SwimVector::ZERO,
            spawn_point: config.spawn_position,
            effects: StatusEffects::new(config.max_boost_multiplier, config.impairment_floor),
            oxygen: OxygenMeter::new(
                config.oxygen_capacity,
                config.oxygen_drain_rate,
                config.oxygen_low_threshold,
            ),
            respawn: RespawnSequence::new(
                config.dying_hold,
                config.ghost_speed,
                config.ghost_curve_height,
            ),
        }
    }
}

#[derive(Debug)]
struct Hunter {
    position: WorldPosition,
}

#[derive(Clone, Copy, Debug)]
struct Pickup {
    id: PickupId,
    position: WorldPosition,
    kind: PickupKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use deeptide_core::RespawnPhase;

    const DIVER: DiverId = DiverId::new(0);
    const TICK: Duration = Duration::from_millis(100);

    fn tick(world: &mut World, events: &mut Vec<Event>) {
        apply(world, Command::Tick { dt: TICK }, events);
    }

    fn tick_seconds(world: &mut World, seconds: f32) -> Vec<Event> {
        let mut events = Vec::new();
        let steps = (seconds * 10.0).round() as u32;
        for _ in 0..steps {
            tick(world, &mut events);
        }
        events
    }

    fn snapshot(world: &World) -> query::DiverSnapshot {
        query::diver_view(world)
            .into_vec()
            .into_iter()
            .next()
            .expect("world has a diver")
    }

    #[test]
    fn boost_replacement_uses_the_second_clock() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::ApplyBoost {
                diver: DIVER,
                multiplier: 1.5,
                duration: Duration::from_secs(4),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::ApplyBoost {
                diver: DIVER,
                multiplier: 2.0,
                duration: Duration::from_secs(2),
            },
            &mut events,
        );
        assert!((snapshot(&world).boost_multiplier - 2.0).abs() < f32::EPSILON);

        let events = tick_seconds(&mut world, 2.0);
        assert!(events.iter().any(|event| matches!(
            event,
            Event::EffectExpired {
                kind: EffectKind::Boost,
                ..
            }
        )));
        assert!((snapshot(&world).boost_multiplier - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn impairment_reports_the_floored_multiplier() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::ApplyImpairment {
                diver: DIVER,
                multiplier: 0.1,
                duration: Duration::from_secs(2),
            },
            &mut events,
        );

        match events.as_slice() {
            [Event::ImpairmentApplied { multiplier, .. }] => {
                assert!((multiplier - 0.6).abs() < f32::EPSILON);
            }
            other => panic!("unexpected events: {other:?}"),
        }
        assert!((snapshot(&world).impairment_multiplier - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn slow_round_trip_restores_the_impairment() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::ApplyImpairment {
                diver: DIVER,
                multiplier: 0.7,
                duration: Duration::from_secs(30),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::ApplySlow {
                diver: DIVER,
                multiplier: 0.9,
                duration: Duration::from_secs(2),
            },
            &mut events,
        );
        assert!((snapshot(&world).impairment_multiplier - 0.7).abs() < f32::EPSILON);

        let _ = tick_seconds(&mut world, 2.0);
        assert!((snapshot(&world).impairment_multiplier - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn steering_scales_with_the_effective_multiplier() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::StartOxygen { diver: DIVER },
            &mut events,
        );
        apply(
            &mut world,
            Command::Steer {
                diver: DIVER,
                direction: SwimVector::new(1.0, 0.0),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::ApplyBoost {
                diver: DIVER,
                multiplier: 2.0,
                duration: Duration::from_secs(10),
            },
            &mut events,
        );

        let start = snapshot(&world).position;
        let _ = tick_seconds(&mut world, 1.0);
        let travelled = snapshot(&world).position.x() - start.x();
        // 8.0 swim speed doubled for one second.
        assert!((travelled - 16.0).abs() < 0.01);
    }

    #[test]
    fn oxygen_depletion_cascades_into_the_respawn_cycle() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::StartOxygen { diver: DIVER },
            &mut events,
        );

        // 100 capacity at 15 per second: roughly ten left after six seconds,
        // with the low warning already fired at the 30 threshold.
        let events = tick_seconds(&mut world, 6.0);
        let state = snapshot(&world);
        assert!((state.oxygen_current - 10.0).abs() < 0.01);
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, Event::OxygenLow { .. }))
                .count(),
            1
        );

        // Depletion lands at 6.7 seconds and the death is observed in the
        // same batch as the depletion event.
        let events = tick_seconds(&mut world, 1.0);
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, Event::OxygenDepleted { .. }))
                .count(),
            1
        );
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::DiverDied { .. })));
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::RespawnStarted { .. })));
        assert!(!snapshot(&world).has_respawned);
    }

    #[test]
    fn death_trigger_is_ignored_outside_alive() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(&mut world, Command::TriggerDeath { diver: DIVER }, &mut events);
        let died = events
            .iter()
            .filter(|event| matches!(event, Event::DiverDied { .. }))
            .count();
        assert_eq!(died, 1);

        events.clear();
        apply(&mut world, Command::TriggerDeath { diver: DIVER }, &mut events);
        assert!(events.is_empty());
        assert_eq!(snapshot(&world).phase, RespawnPhase::Dying);
    }

    #[test]
    fn full_cycle_resets_effects_and_oxygen() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::StartOxygen { diver: DIVER },
            &mut events,
        );
        apply(
            &mut world,
            Command::Steer {
                diver: DIVER,
                direction: SwimVector::new(1.0, 0.0),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::ApplyImpairment {
                diver: DIVER,
                multiplier: 0.7,
                duration: Duration::from_secs(60),
            },
            &mut events,
        );

        // Swim away from the spawn point, then die out there.
        let _ = tick_seconds(&mut world, 2.0);
        events.clear();
        apply(&mut world, Command::TriggerDeath { diver: DIVER }, &mut events);
        assert!(!snapshot(&world).oxygen_running);

        // Dying hold plus the transit back; generous budget.
        let events = tick_seconds(&mut world, 10.0);
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::RespawnCompleted { .. })));

        let state = snapshot(&world);
        assert!(state.has_respawned);
        assert!((state.effective_multiplier - 1.0).abs() < f32::EPSILON);
        assert!((state.oxygen_current - state.oxygen_capacity).abs() < f32::EPSILON);
        assert!(state.oxygen_running);
        let spawn = WorldPosition::new(0.0, 2.0);
        assert!(state.position.distance(spawn) < 1e-4);
    }

    #[test]
    fn missing_spawn_point_degrades_to_the_death_position() {
        let config = WorldConfig {
            spawn_position: None,
            ..WorldConfig::default()
        };
        let mut world = World::with_config(config);
        let mut events = Vec::new();

        let death_position = snapshot(&world).position;
        apply(&mut world, Command::TriggerDeath { diver: DIVER }, &mut events);
        let events = tick_seconds(&mut world, 2.0);
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::RespawnCompleted { .. })));
        assert!(snapshot(&world).position.distance(death_position) < 1e-4);
    }

    #[test]
    fn pickups_apply_their_effect_on_contact() {
        let mut world = World::new();
        let mut events = Vec::new();

        let diver_position = snapshot(&world).position;
        apply(
            &mut world,
            Command::SpawnPickup {
                position: diver_position,
                kind: PickupKind::Boost,
            },
            &mut events,
        );
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::PickupSpawned { .. })));

        events.clear();
        tick(&mut world, &mut events);
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::PickupCollected { .. })));
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::BoostApplied { .. })));
        assert!(query::pickup_view(&world).is_empty());
        assert!(snapshot(&world).boost_multiplier > 1.0);
    }

    #[test]
    fn hunter_moves_only_through_commands() {
        let mut world = World::new();
        let mut events = Vec::new();

        let destination = WorldPosition::new(3.5, -1.0);
        apply(
            &mut world,
            Command::MoveHunter {
                position: destination,
            },
            &mut events,
        );
        assert!(events.is_empty());
        assert_eq!(query::hunter_position(&world), destination);
    }
}
