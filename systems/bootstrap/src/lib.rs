#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Deeptide experience.

use deeptide_core::{Command, WorldPosition};
use deeptide_world::{query, World};

/// Produces data and commands required to start a run.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner(&self, world: &World) -> &'static str {
        query::welcome_banner(world)
    }

    /// Emits the command batch that brings every diver into play: a spawn
    /// point when the scenario overrides the default, and a running oxygen
    /// drain.
    pub fn initial_commands(
        &self,
        world: &World,
        spawn_override: Option<WorldPosition>,
        out: &mut Vec<Command>,
    ) {
        for diver in query::diver_view(world).iter() {
            if let Some(position) = spawn_override {
                out.push(Command::SetSpawnPoint {
                    diver: diver.id,
                    position,
                });
            }
            out.push(Command::StartOxygen { diver: diver.id });
        }
    }
}
