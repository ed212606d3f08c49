#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs headless Deeptide scenarios.
//!
//! The binary wires the pure systems to the world, replays a seeded run at a
//! fixed tick rate, and prints the notable events along with the final
//! scoreboard. Runs are shareable as encoded scenario strings.

mod scenario_transfer;

use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use deeptide_core::{Command, Event, SwimVector};
use deeptide_system_bootstrap::Bootstrap;
use deeptide_system_pursuit::Pursuit;
use deeptide_system_scoring as scoring;
use deeptide_system_scoring::Scoring;
use deeptide_system_spawning as spawning;
use deeptide_system_spawning::{SpawnArea, Spawning};
use deeptide_world::{self as world, query, World};
use rand::Rng as _;
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

use crate::scenario_transfer::ScenarioConfig;

/// Fixed simulation step used for headless runs.
const TICK: Duration = Duration::from_millis(100);
/// Number of ticks between steering re-rolls.
const STEER_CADENCE: u64 = 10;

/// Command-line arguments accepted by the Deeptide runner.
#[derive(Debug, Parser)]
#[command(name = "deeptide", about = "Headless runner for Deeptide scenarios")]
struct Cli {
    /// Encoded scenario string to replay; overrides the individual flags.
    #[arg(long)]
    scenario: Option<String>,
    /// Seed driving steering noise and pickup placement.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Simulated run length in seconds.
    #[arg(long, default_value_t = 60.0)]
    duration_secs: f32,
    /// Pickup spawn cadence in milliseconds.
    #[arg(long, default_value_t = 2000)]
    spawn_interval_ms: u64,
    /// Print the encoded scenario string and exit without simulating.
    #[arg(long)]
    emit_scenario: bool,
}

/// Entry point for the Deeptide command-line interface.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let scenario = match cli.scenario.as_deref() {
        Some(encoded) => {
            ScenarioConfig::decode(encoded).context("failed to decode scenario string")?
        }
        None => ScenarioConfig {
            seed: cli.seed,
            duration_secs: cli.duration_secs,
            spawn_interval_ms: cli.spawn_interval_ms,
        },
    };

    if cli.emit_scenario {
        println!("{}", scenario.encode());
        return Ok(());
    }

    run(&scenario);
    Ok(())
}

/// Replays the scenario from a fresh world and prints the final scoreboard.
fn run(scenario: &ScenarioConfig) {
    let mut world = World::new();
    let bootstrap = Bootstrap::default();
    println!("{}", bootstrap.welcome_banner(&world));

    let pursuit = Pursuit::default();
    let mut spawner = Spawning::new(spawning::Config::new(
        Duration::from_millis(scenario.spawn_interval_ms),
        scenario.seed,
        SpawnArea::default(),
    ));
    let mut scoreboard = Scoring::new(scoring::Config::default());
    let mut rng = ChaCha8Rng::seed_from_u64(scenario.seed);

    let mut events = Vec::new();
    let mut commands = Vec::new();
    bootstrap.initial_commands(&world, None, &mut commands);
    for command in commands.drain(..) {
        world::apply(&mut world, command, &mut events);
    }

    let diver = match query::diver_view(&world).iter().next() {
        Some(snapshot) => snapshot.id,
        None => return,
    };

    let ticks = (scenario.duration_secs / TICK.as_secs_f32()).round() as u64;
    for tick in 0..ticks {
        if tick % STEER_CADENCE == 0 {
            let direction = steer_direction(&mut rng);
            world::apply(&mut world, Command::Steer { diver, direction }, &mut events);
        }
        world::apply(&mut world, Command::Tick { dt: TICK }, &mut events);
        pump_systems(
            &mut world,
            &pursuit,
            &mut spawner,
            &mut scoreboard,
            &mut events,
            tick,
        );
    }

    let report = scoreboard.report();
    println!(
        "score {} | deaths {} | survived {:.1}s",
        report.score(),
        report.deaths(),
        report.survival_time().as_secs_f32()
    );
}

/// Feeds pending events through every system until the frame quiesces,
/// applying the command batches each pass produces.
fn pump_systems(
    world: &mut World,
    pursuit: &Pursuit,
    spawner: &mut Spawning,
    scoreboard: &mut Scoring,
    events: &mut Vec<Event>,
    tick: u64,
) {
    loop {
        if events.is_empty() {
            break;
        }
        report_events(events, tick);

        let diver_view = query::diver_view(world);
        let hunter = query::hunter_position(world);
        let mut commands = Vec::new();
        pursuit.handle(events, &diver_view, hunter, &mut commands);
        spawner.handle(events, &mut commands);
        let mut published = Vec::new();
        scoreboard.handle(events, &mut published);

        events.clear();
        events.append(&mut published);
        if commands.is_empty() && events.is_empty() {
            break;
        }
        for command in commands {
            world::apply(world, command, events);
        }
    }
}

/// Prints the events a spectator would care about, prefixed with run time.
fn report_events(events: &[Event], tick: u64) {
    let seconds = tick as f32 * TICK.as_secs_f32();
    for event in events {
        match event {
            Event::OxygenLow { .. } => println!("[{seconds:5.1}s] oxygen running low"),
            Event::OxygenDepleted { .. } => println!("[{seconds:5.1}s] oxygen depleted"),
            Event::DiverDied { position, .. } => println!(
                "[{seconds:5.1}s] diver died at ({:.1}, {:.1})",
                position.x(),
                position.y()
            ),
            Event::RespawnCompleted { .. } => println!("[{seconds:5.1}s] diver respawned"),
            Event::PickupCollected { kind, .. } => {
                println!("[{seconds:5.1}s] collected {kind:?} pickup");
            }
            Event::ScoreboardUpdated { report } => {
                println!("[{seconds:5.1}s] score {}", report.score());
            }
            _ => {}
        }
    }
}

/// Draws a fresh unit-length steering direction from the scenario rng.
fn steer_direction(rng: &mut ChaCha8Rng) -> SwimVector {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let direction = glam::Vec2::from_angle(angle);
    SwimVector::new(direction.x, direction.y)
}
