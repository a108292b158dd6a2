//! Tick system - orchestrates one simulation frame
//!
//! Commands are handled first. While playing, a frame then runs:
//! player input -> hostile steering -> resource animation -> pickups ->
//! projectile hits -> contact damage -> terminal check.
//!
//! Removals found during a pass are applied in one compaction step after the
//! pass, never while iterating.

use std::time::Duration;

use crate::ecs::world::World;
use crate::simulation::events::{SimulationEvent, SoundCue};
use crate::simulation::input::{Command, PlayerInput};
use crate::simulation::spawn;
use crate::spatial::collision::{any_overlap, overlapping, remove_overlapping};

/// Run a single simulation frame
///
/// `dt` is the simulated time covered by this frame; pass
/// `world.config.tick_duration()` for the reference rate. Returns the events
/// that occurred, in the order they happened.
pub fn run_simulation_tick(
    world: &mut World,
    input: &PlayerInput,
    commands: &[Command],
    dt: Duration,
) -> Vec<SimulationEvent> {
    let mut events = Vec::new();

    process_commands(world, commands, &mut events);
    if world.quit_requested || !world.phase.is_playing() {
        return events;
    }

    update_player(world, input, dt, &mut events);
    update_hostiles(world, dt);
    update_resources(world, dt);
    resolve_pickups(world, &mut events);
    resolve_projectile_hits(world, &mut events);
    resolve_contact_damage(world, &mut events);
    check_terminal(world, &mut events);

    world.tick();
    events
}

fn process_commands(world: &mut World, commands: &[Command], events: &mut Vec<SimulationEvent>) {
    for command in commands {
        match command {
            Command::Restart => {
                if world.phase.restart() {
                    world.reset_run();
                    tracing::info!("Restarted at tick {}", world.current_tick);
                    events.push(SimulationEvent::Restarted {
                        tick: world.current_tick,
                    });
                }
            }
            Command::Quit => {
                if !world.quit_requested {
                    world.quit_requested = true;
                    events.push(SimulationEvent::QuitRequested);
                }
            }
        }
    }
}

fn update_player(
    world: &mut World,
    input: &PlayerInput,
    dt: Duration,
    events: &mut Vec<SimulationEvent>,
) {
    let fired = world
        .player
        .advance(input, dt, &world.config, &mut world.ids);
    if fired {
        if let Some(shot) = world.player.projectiles.last() {
            events.push(SimulationEvent::ProjectileFired { id: shot.id });
        }
    }
}

fn update_hostiles(world: &mut World, dt: Duration) {
    let frames = world.config.frames(dt) as f32;
    let target = world.player.center();
    for hostile in &mut world.hostiles {
        hostile.advance(target, frames);
    }
}

fn update_resources(world: &mut World, dt: Duration) {
    let frames = world.config.frames(dt) as f32;
    for resource in &mut world.resources {
        resource.advance(frames, &world.config.resource);
    }
}

/// Collect every resource touching the player and replace each one
fn resolve_pickups(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let collected = remove_overlapping(&mut world.resources, std::slice::from_ref(&world.player));
    if collected.is_empty() {
        return;
    }

    for resource in &collected {
        world.player.collect(resource.kind, &world.config);
        events.push(SimulationEvent::Sound(SoundCue::Collect));
        events.push(SimulationEvent::ResourceCollected {
            id: resource.id,
            kind: resource.kind,
        });
    }

    for (id, kind) in spawn::replace_collected(world, collected.len()) {
        tracing::debug!("Spawned replacement {} resource {}", kind, id);
        events.push(SimulationEvent::ResourceSpawned { id, kind });
    }
}

/// Each projectile damages the first live hostile it touches and is consumed
///
/// Nothing moves during this pass, so the overlap pairs are computed once.
/// Pairs come ordered by projectile then hostile, which makes the first
/// usable pair for a projectile its first live target in spawn order.
fn resolve_projectile_hits(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let damage = world.config.hostile.damage_per_hit;
    let kill_score = world.config.player.kill_score;
    let hostiles = &mut world.hostiles;
    let player = &mut world.player;

    for (pi, hi) in overlapping(&player.projectiles, hostiles.as_slice()) {
        let projectile = &mut player.projectiles[pi];
        let hostile = &mut hostiles[hi];
        if !projectile.active || !hostile.is_alive() {
            continue;
        }

        let destroyed = hostile.take_damage(damage);
        projectile.active = false;

        events.push(SimulationEvent::Sound(SoundCue::HostileHit));
        events.push(SimulationEvent::HostileHit {
            id: hostile.id,
            remaining_health: hostile.health,
        });

        if destroyed {
            player.score += kill_score;
            tracing::debug!("Hostile {} destroyed", hostile.id);
            events.push(SimulationEvent::HostileDestroyed { id: hostile.id });
        }
    }

    player.projectiles.retain(|p| p.active);
    hostiles.retain(|h| h.is_alive());
}

/// At most one point of contact damage per frame, however many hostiles touch
fn resolve_contact_damage(world: &mut World, events: &mut Vec<SimulationEvent>) {
    if any_overlap(&world.player, &world.hostiles) {
        world.player.apply_contact_damage(&world.config);
        events.push(SimulationEvent::ContactDamage {
            health: world.player.vitals.health,
        });
    }
}

fn check_terminal(world: &mut World, events: &mut Vec<SimulationEvent>) {
    if let Some(cause) = world.phase.check_terminal(&world.player) {
        tracing::info!(
            "Game over at tick {}: {:?} depleted, score {}",
            world.current_tick,
            cause,
            world.player.score
        );
        events.push(SimulationEvent::GameOver {
            tick: world.current_tick,
            cause,
            score: world.player.score,
        });
    }
}
