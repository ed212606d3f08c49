#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Deeptide simulation.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! for systems to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Deeptide.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Updates the steering intent a diver applies while alive.
    Steer {
        /// Identifier of the diver whose input changes.
        diver: DiverId,
        /// Desired swim direction; magnitudes above one are normalized.
        direction: SwimVector,
    },
    /// Applies a timed speed boost, replacing any boost already active.
    ApplyBoost {
        /// Identifier of the boosted diver.
        diver: DiverId,
        /// Requested speed multiplier, capped at the configured maximum.
        multiplier: f32,
        /// Time until the boost reverts on its own.
        duration: Duration,
    },
    /// Applies a timed impairment, replacing any impairment already active.
    ApplyImpairment {
        /// Identifier of the impaired diver.
        diver: DiverId,
        /// Requested speed multiplier, clamped to the configured safety floor.
        multiplier: f32,
        /// Time until the impairment reverts on its own.
        duration: Duration,
    },
    /// Applies an environmental slow that layers under any active impairment.
    ApplySlow {
        /// Identifier of the slowed diver.
        diver: DiverId,
        /// Requested speed multiplier; the more restrictive value wins.
        multiplier: f32,
        /// Time until the pre-slow multiplier is restored.
        duration: Duration,
    },
    /// Temporarily scales the diver's oxygen drain rate.
    ModifyOxygenDrain {
        /// Identifier of the affected diver.
        diver: DiverId,
        /// Factor applied to the base drain rate for the duration.
        multiplier: f32,
        /// Time until the base drain rate is restored.
        duration: Duration,
    },
    /// Starts the diver's oxygen drain; a no-op while already running.
    StartOxygen {
        /// Identifier of the affected diver.
        diver: DiverId,
    },
    /// Stops the diver's oxygen drain; a no-op while already stopped.
    StopOxygen {
        /// Identifier of the affected diver.
        diver: DiverId,
    },
    /// Restores the diver's oxygen to capacity without restarting the drain.
    RefillOxygen {
        /// Identifier of the affected diver.
        diver: DiverId,
    },
    /// Kills the diver at its current position; ignored unless alive.
    TriggerDeath {
        /// Identifier of the dying diver.
        diver: DiverId,
    },
    /// Configures the position a diver returns to after ghost transit.
    SetSpawnPoint {
        /// Identifier of the configured diver.
        diver: DiverId,
        /// Position the diver revives at.
        position: WorldPosition,
    },
    /// Inserts a collectible pickup into the water column.
    SpawnPickup {
        /// Location the pickup floats at.
        position: WorldPosition,
        /// Effect granted when a diver collects the pickup.
        kind: PickupKind,
    },
    /// Repositions the hunter; emitted by the pursuit system each tick.
    MoveHunter {
        /// Position the hunter occupies after the move.
        position: WorldPosition,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a boost took effect.
    BoostApplied {
        /// Identifier of the boosted diver.
        diver: DiverId,
        /// Multiplier in effect after capping.
        multiplier: f32,
        /// Time until the boost reverts.
        duration: Duration,
    },
    /// Confirms that an impairment took effect.
    ImpairmentApplied {
        /// Identifier of the impaired diver.
        diver: DiverId,
        /// Multiplier in effect after the safety floor clamp.
        multiplier: f32,
        /// Time until the impairment reverts.
        duration: Duration,
    },
    /// Confirms that an environmental slow took effect.
    SlowApplied {
        /// Identifier of the slowed diver.
        diver: DiverId,
        /// Combined impairment multiplier in effect while the slow holds.
        multiplier: f32,
        /// Time until the pre-slow multiplier is restored.
        duration: Duration,
    },
    /// Reports that a timed effect ran out and reverted.
    EffectExpired {
        /// Identifier of the recovering diver.
        diver: DiverId,
        /// Kind of effect that expired.
        kind: EffectKind,
    },
    /// Reports that oxygen crossed the low threshold downward.
    OxygenLow {
        /// Identifier of the affected diver.
        diver: DiverId,
    },
    /// Reports that oxygen recovered above the low threshold.
    OxygenNormal {
        /// Identifier of the affected diver.
        diver: DiverId,
    },
    /// Reports that oxygen reached zero; the drain halts until restarted.
    OxygenDepleted {
        /// Identifier of the affected diver.
        diver: DiverId,
    },
    /// Announces a death; fired at most once per respawn cycle.
    DiverDied {
        /// Identifier of the dying diver.
        diver: DiverId,
        /// Position the diver died at.
        position: WorldPosition,
    },
    /// Announces the start of the ghost-transit sequence.
    RespawnStarted {
        /// Identifier of the respawning diver.
        diver: DiverId,
    },
    /// Announces that the diver is alive at its spawn point again.
    RespawnCompleted {
        /// Identifier of the revived diver.
        diver: DiverId,
    },
    /// Confirms that a pickup entered the world.
    PickupSpawned {
        /// Identifier assigned to the pickup.
        pickup: PickupId,
        /// Location the pickup floats at.
        position: WorldPosition,
        /// Effect granted on collection.
        kind: PickupKind,
    },
    /// Confirms that a diver collected a pickup.
    PickupCollected {
        /// Identifier of the consumed pickup.
        pickup: PickupId,
        /// Identifier of the collecting diver.
        diver: DiverId,
        /// Effect the pickup granted.
        kind: PickupKind,
    },
    /// Publishes a refreshed scoreboard snapshot.
    ScoreboardUpdated {
        /// Aggregated run statistics.
        report: ScoreReport,
    },
}

/// Timed effects that can expire on a diver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Speed boost above the neutral multiplier.
    Boost,
    /// Impairment below the neutral multiplier.
    Impairment,
    /// Environmental slow layered under the impairment.
    Slow,
}

/// Phases of the death-and-respawn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RespawnPhase {
    /// The diver swims, drains oxygen, and accepts input.
    Alive,
    /// Momentary hold at the death position before transit begins.
    Dying,
    /// Intangible drift along the curved path back to the spawn point.
    GhostTransit,
    /// Transit tail in which state is restored; observable for one tick at most.
    Reviving,
}

/// Unique identifier assigned to a diver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiverId(u32);

impl DiverId {
    /// Creates a new diver identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickupId(u32);

impl PickupId {
    /// Creates a new pickup identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Effects granted by collectible pickups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Grants a timed speed boost.
    Boost,
    /// Applies a timed impairment.
    Poison,
}

/// Location in the water column expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition {
    x: f32,
    y: f32,
}

impl WorldPosition {
    /// Creates a new position from explicit coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in world units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in world units; positive is toward the surface.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Computes the Euclidean distance between two positions.
    #[must_use]
    pub fn distance(self, other: WorldPosition) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Offsets the position by the provided vector scaled by `scale`.
    #[must_use]
    pub fn offset(self, direction: SwimVector, scale: f32) -> Self {
        Self {
            x: self.x + direction.x() * scale,
            y: self.y + direction.y() * scale,
        }
    }
}

/// Direction of travel through the water, expressed as a free vector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwimVector {
    x: f32,
    y: f32,
}

impl SwimVector {
    /// Vector with no horizontal or vertical component.
    pub const ZERO: SwimVector = SwimVector { x: 0.0, y: 0.0 };

    /// Creates a new vector from explicit components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the vector.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical component of the vector.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Length of the vector.
    #[must_use]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the vector scaled to unit length, or zero when degenerate.
    #[must_use]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= f32::EPSILON {
            return Self::ZERO;
        }
        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
        }
    }

    /// Direction pointing from `from` toward `to`, or zero when coincident.
    #[must_use]
    pub fn between(from: WorldPosition, to: WorldPosition) -> Self {
        Self {
            x: to.x() - from.x(),
            y: to.y() - from.y(),
        }
        .normalized()
    }
}

/// Aggregated run statistics published by the scoring system.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    score: u32,
    deaths: u32,
    survival_time: Duration,
}

impl ScoreReport {
    /// Creates a new report from explicit totals.
    #[must_use]
    pub const fn new(score: u32, deaths: u32, survival_time: Duration) -> Self {
        Self {
            score,
            deaths,
            survival_time,
        }
    }

    /// Points accumulated through pickups.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of completed death cycles.
    #[must_use]
    pub const fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Total time spent alive across the run.
    #[must_use]
    pub const fn survival_time(&self) -> Duration {
        self.survival_time
    }
}
