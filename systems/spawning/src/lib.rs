#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawning system responsible for emitting pickup spawn commands.
//!
//! Spawning pauses the moment a diver dies and resumes once the respawn cycle
//! completes, so a ghost never drifts back through a field of fresh pickups it
//! cannot collect.

use std::time::Duration;

use deeptide_core::{Command, Event, PickupKind, WorldPosition};

const RNG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const RNG_INCREMENT: u64 = 1;
const SPAWN_KINDS: [PickupKind; 4] = [
    PickupKind::Boost,
    PickupKind::Boost,
    PickupKind::Poison,
    PickupKind::Boost,
];

/// Rectangular region of the water column pickups may appear in.
#[derive(Clone, Copy, Debug)]
pub struct SpawnArea {
    /// Lower-left corner of the region.
    pub min: WorldPosition,
    /// Upper-right corner of the region.
    pub max: WorldPosition,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            min: WorldPosition::new(-12.0, -6.0),
            max: WorldPosition::new(12.0, 6.0),
        }
    }
}

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    spawn_interval: Duration,
    rng_seed: u64,
    area: SpawnArea,
}

impl Config {
    /// Creates a new configuration using the provided cadence, seed and region.
    #[must_use]
    pub const fn new(spawn_interval: Duration, rng_seed: u64, area: SpawnArea) -> Self {
        Self {
            spawn_interval,
            rng_seed,
            area,
        }
    }
}

/// Pure system that deterministically emits pickup spawn commands.
#[derive(Debug)]
pub struct Spawning {
    spawn_interval: Duration,
    area: SpawnArea,
    accumulator: Duration,
    rng_state: u64,
    kind_index: usize,
    paused: bool,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            spawn_interval: config.spawn_interval,
            area: config.area,
            accumulator: Duration::ZERO,
            rng_state: config.rng_seed,
            kind_index: 0,
            paused: false,
        }
    }

    /// Consumes events to emit spawn commands on the configured cadence.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        let mut accumulated = Duration::ZERO;
        for event in events {
            match event {
                Event::DiverDied { .. } => {
                    self.paused = true;
                    self.accumulator = Duration::ZERO;
                }
                Event::RespawnCompleted { .. } => {
                    self.paused = false;
                }
                Event::TimeAdvanced { dt } => {
                    accumulated = accumulated.saturating_add(*dt);
                }
                _ => {}
            }
        }

        if self.paused || self.spawn_interval.is_zero() || accumulated.is_zero() {
            return;
        }

        self.accumulator = self.accumulator.saturating_add(accumulated);
        let attempts = self.resolve_spawn_attempts();
        for _ in 0..attempts {
            let position = self.next_position();
            let kind = self.next_kind();
            out.push(Command::SpawnPickup { position, kind });
        }
    }

    fn resolve_spawn_attempts(&mut self) -> usize {
        let mut attempts = 0;
        while self.accumulator >= self.spawn_interval {
            self.accumulator -= self.spawn_interval;
            attempts += 1;
        }
        attempts
    }

    fn next_position(&mut self) -> WorldPosition {
        let x = self.area.min.x() + self.advance_unit() * (self.area.max.x() - self.area.min.x());
        let y = self.area.min.y() + self.advance_unit() * (self.area.max.y() - self.area.min.y());
        WorldPosition::new(x, y)
    }

    fn advance_unit(&mut self) -> f32 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(RNG_MULTIPLIER)
            .wrapping_add(RNG_INCREMENT);
        // Top bits of the LCG state mapped into [0, 1).
        (self.rng_state >> 40) as f32 / (1u64 << 24) as f32
    }

    fn next_kind(&mut self) -> PickupKind {
        let kind = SPAWN_KINDS[self.kind_index % SPAWN_KINDS.len()];
        self.kind_index = (self.kind_index + 1) % SPAWN_KINDS.len();
        kind
    }
}
