//! Hostile agents that chase the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::config::HostileConfig;
use crate::core::geometry::{direction_to, facing_degrees, Aabb};
use crate::core::types::EntityId;
use crate::entity::Bounded;

/// A pursuing hostile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub id: EntityId,
    pub position: Vec2,
    /// Degrees, presentation only
    pub facing: f32,
    pub health: i32,
    /// Pixels per reference frame
    pub speed: f32,
    pub size: Vec2,
}

impl Hostile {
    pub fn new(id: EntityId, position: Vec2, config: &HostileConfig) -> Self {
        Self {
            id,
            position,
            facing: 0.0,
            health: config.health,
            speed: config.speed,
            size: Vec2::splat(config.size),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Steer straight at `target` (a centre point)
    pub fn advance(&mut self, target: Vec2, frames: f32) {
        let direction = direction_to(self.bounds().center(), target);
        self.position += direction * self.speed * frames;
        if direction != Vec2::ZERO {
            self.facing = facing_degrees(direction);
        }
    }

    /// Apply one hit. Returns `true` when this hit destroyed the hostile.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.health <= 0
    }
}

impl Bounded for Hostile {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}
