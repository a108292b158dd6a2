//! Spawn manager - keeps the hostile and resource pools at their targets
//!
//! Resources are replaced one-for-one the moment they are collected, so the
//! resource population never changes while playing. Hostiles only shrink
//! during a run and are regenerated on restart. Spawn points are uniform over
//! the field (the whole box inside it) and may overlap anything.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, ResourceKind};
use crate::ecs::world::World;

/// Uniform top-left position for a box of `size` fully inside the field
pub fn random_position(rng: &mut ChaCha8Rng, config: &SimulationConfig, size: f32) -> Vec2 {
    let max_x = (config.field.width - size).max(0.0);
    let max_y = (config.field.height - size).max(0.0);
    Vec2::new(rng.gen_range(0.0..=max_x), rng.gen_range(0.0..=max_y))
}

/// Independently and uniformly chosen resource kind
pub fn random_kind(rng: &mut ChaCha8Rng) -> ResourceKind {
    *ResourceKind::ALL
        .choose(rng)
        .unwrap_or(&ResourceKind::Food)
}

/// Scattered decorative points covering the field
pub fn background_points(rng: &mut ChaCha8Rng, config: &SimulationConfig, count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|_| random_position(rng, config, 0.0))
        .collect()
}

pub fn spawn_hostile(world: &mut World) -> EntityId {
    let position = random_position(&mut world.rng, &world.config, world.config.hostile.size);
    world.spawn_hostile_at(position)
}

pub fn spawn_resource(world: &mut World) -> (EntityId, ResourceKind) {
    let kind = random_kind(&mut world.rng);
    let position = random_position(&mut world.rng, &world.config, world.config.resource.size);
    let id = world.spawn_resource_at(kind, position);
    (id, kind)
}

/// Clear both pools and refill them to their targets
pub fn populate(world: &mut World) {
    world.hostiles.clear();
    world.resources.clear();

    for _ in 0..world.config.hostile.population {
        spawn_hostile(world);
    }
    for _ in 0..world.config.resource.population {
        spawn_resource(world);
    }

    tracing::debug!(
        "Populated world with {} hostiles and {} resources",
        world.hostiles.len(),
        world.resources.len()
    );
}

/// Spawn one replacement per collected resource
pub fn replace_collected(world: &mut World, collected: usize) -> Vec<(EntityId, ResourceKind)> {
    (0..collected).map(|_| spawn_resource(world)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_position_keeps_box_inside() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let p = random_position(&mut rng, &config, 30.0);
            assert!(p.x >= 0.0 && p.x + 30.0 <= config.field.width);
            assert!(p.y >= 0.0 && p.y + 30.0 <= config.field.height);
        }
    }

    #[test]
    fn test_random_kind_covers_all_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut seen = [false; 3];
        for _ in 0..200 {
            match random_kind(&mut rng) {
                ResourceKind::Food => seen[0] = true,
                ResourceKind::Water => seen[1] = true,
                ResourceKind::Wood => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_populate_resets_to_targets() {
        let mut world = World::default();
        world.hostiles.truncate(1);
        world.resources.truncate(3);
        populate(&mut world);
        assert_eq!(world.hostiles.len(), 5);
        assert_eq!(world.resources.len(), 10);
    }

    #[test]
    fn test_replace_collected_spawns_exactly_that_many() {
        let mut world = World::default();
        world.resources.truncate(7);
        let spawned = replace_collected(&mut world, 3);
        assert_eq!(spawned.len(), 3);
        assert_eq!(world.resources.len(), 10);
    }
}
