//! Greedy autopilot used by the headless runner and soak tests
//!
//! Heads for the nearest resource that restores whichever of hunger/thirst is
//! lower (any resource if none of that kind exist) and keeps the trigger held
//! whenever a hostile sits on the firing line.

use glam::Vec2;

use crate::ecs::world::World;
use crate::entity::{Bounded, VitalType};
use crate::core::types::ResourceKind;
use crate::simulation::input::PlayerInput;

/// Choose this frame's input
pub fn decide(world: &World) -> PlayerInput {
    let player = &world.player;
    let wanted = match player.vitals.most_pressing() {
        VitalType::Thirst => ResourceKind::Water,
        _ => ResourceKind::Food,
    };

    let here = player.center();
    let target = nearest(here, world, Some(wanted)).or_else(|| nearest(here, world, None));

    let mut input = PlayerInput::default();
    if let Some(target) = target {
        let deadzone = player.speed;
        let delta = target - here;
        input.left = delta.x < -deadzone;
        input.right = delta.x > deadzone;
        input.up = delta.y < -deadzone;
        input.down = delta.y > deadzone;
    }
    input.fire = hostile_in_line(world);
    input
}

fn nearest(from: Vec2, world: &World, kind: Option<ResourceKind>) -> Option<Vec2> {
    world
        .resources
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind == k))
        .map(|r| r.bounds().center())
        .min_by(|a, b| from.distance_squared(*a).total_cmp(&from.distance_squared(*b)))
}

/// Any hostile to the right whose box spans the player's centre line
fn hostile_in_line(world: &World) -> bool {
    let here = world.player.center();
    world.hostiles.iter().any(|h| {
        let b = h.bounds();
        b.right() > here.x && b.top() <= here.y && b.bottom() >= here.y
    })
}
