#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic scoring system that folds world events into run statistics.
//!
//! The scoreboard republishes at most once per tick, and only when something
//! score-worthy happened; the survival clock accrues silently in between.

use std::time::Duration;

use deeptide_core::{Event, PickupKind, ScoreReport};

/// Configuration parameters required to construct the scoring system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Points granted for collecting a boost pickup.
    pub boost_points: u32,
    /// Points granted for surviving a poison pickup.
    pub poison_points: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boost_points: 100,
            poison_points: 25,
        }
    }
}

/// Pure system that aggregates score, deaths, and survival time.
#[derive(Debug)]
pub struct Scoring {
    config: Config,
    score: u32,
    deaths: u32,
    survival_time: Duration,
    alive: bool,
    dirty: bool,
}

impl Scoring {
    /// Creates a new scoring system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            score: 0,
            deaths: 0,
            survival_time: Duration::ZERO,
            alive: true,
            dirty: false,
        }
    }

    /// Snapshot of the current totals, independent of publication cadence.
    #[must_use]
    pub fn report(&self) -> ScoreReport {
        ScoreReport::new(self.score, self.deaths, self.survival_time)
    }

    /// Consumes world events and publishes a scoreboard update when totals
    /// changed during a tick.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Event>) {
        let mut tick_observed = false;

        for event in events {
            match event {
                Event::TimeAdvanced { dt } => {
                    tick_observed = true;
                    if self.alive {
                        self.survival_time = self.survival_time.saturating_add(*dt);
                    }
                }
                Event::PickupCollected { kind, .. } => {
                    self.score = self.score.saturating_add(match kind {
                        PickupKind::Boost => self.config.boost_points,
                        PickupKind::Poison => self.config.poison_points,
                    });
                    self.dirty = true;
                }
                Event::DiverDied { .. } => {
                    self.deaths = self.deaths.saturating_add(1);
                    self.alive = false;
                    self.dirty = true;
                }
                Event::RespawnCompleted { .. } => {
                    self.alive = true;
                    self.dirty = true;
                }
                _ => {}
            }
        }

        if tick_observed && self.dirty {
            self.dirty = false;
            out.push(Event::ScoreboardUpdated {
                report: self.report(),
            });
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
