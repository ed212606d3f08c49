use std::time::Duration;

use deeptide_core::{Command, DiverId, Event, PickupKind};
use deeptide_system_scoring::Scoring;
use deeptide_world::{self as world, query, World};

const DIVER: DiverId = DiverId::new(0);

#[test]
fn world_driven_run_produces_a_scoreboard() {
    let mut world = World::new();
    let mut scoring = Scoring::default();

    // Drop a boost pickup on the diver and let the world hand it over.
    let diver_position = query::diver_view(&world)
        .into_vec()
        .into_iter()
        .next()
        .expect("world has a diver")
        .position;
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::SpawnPickup {
            position: diver_position,
            kind: PickupKind::Boost,
        },
        &mut events,
    );
    world::apply(
        &mut world,
        Command::Tick {
            dt: Duration::from_millis(100),
        },
        &mut events,
    );

    let mut published = Vec::new();
    scoring.handle(&events, &mut published);

    let report = published
        .iter()
        .find_map(|event| match event {
            Event::ScoreboardUpdated { report } => Some(*report),
            _ => None,
        })
        .expect("scoreboard published after the pickup");
    assert_eq!(report.score(), 100);
    assert_eq!(report.deaths(), 0);
    assert_eq!(report.survival_time(), Duration::from_millis(100));
}

#[test]
fn deaths_reach_the_scoreboard_in_the_same_tick() {
    let mut world = World::new();
    let mut scoring = Scoring::default();

    let mut events = Vec::new();
    world::apply(&mut world, Command::TriggerDeath { diver: DIVER }, &mut events);
    world::apply(
        &mut world,
        Command::Tick {
            dt: Duration::from_millis(100),
        },
        &mut events,
    );

    let mut published = Vec::new();
    scoring.handle(&events, &mut published);
    assert!(published.iter().any(|event| matches!(
        event,
        Event::ScoreboardUpdated { report } if report.deaths() == 1
    )));
}
