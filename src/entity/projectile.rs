//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::geometry::Aabb;
use crate::core::types::EntityId;
use crate::entity::Bounded;

/// A projectile fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec2,
    /// Unit direction of travel
    pub direction: Vec2,
    /// Pixels per reference frame
    pub speed: f32,
    pub size: Vec2,
    /// Cleared once the projectile leaves the field or strikes a hostile
    pub active: bool,
}

impl Projectile {
    /// Default heading for every shot
    pub const DEFAULT_DIRECTION: Vec2 = Vec2::X;

    /// Spawn a projectile centred on `center`
    pub fn new(id: EntityId, center: Vec2, direction: Vec2, config: &SimulationConfig) -> Self {
        let size = Vec2::splat(config.projectile.size);
        Self {
            id,
            position: center - size * 0.5,
            direction,
            speed: config.projectile.speed,
            size,
            active: true,
        }
    }

    pub fn advance(&mut self, frames: f32, field: &Aabb) {
        if !self.active {
            return;
        }
        self.position += self.direction * self.speed * frames;

        let bounds = self.bounds();
        if bounds.right() < field.left() || bounds.left() > field.right() {
            self.active = false;
        }
    }
}

impl Bounded for Projectile {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot_at(x: f32, direction: Vec2) -> Projectile {
        let config = SimulationConfig::default();
        Projectile::new(EntityId(1), Vec2::new(x, 100.0), direction, &config)
    }

    #[test]
    fn test_moves_along_direction() {
        let field = SimulationConfig::default().field_bounds();
        let mut p = shot_at(500.0, Projectile::DEFAULT_DIRECTION);
        let start = p.position;
        p.advance(1.0, &field);
        assert_eq!(p.position, start + Vec2::new(10.0, 0.0));
        assert!(p.active);
    }

    #[test]
    fn test_deactivates_only_after_fully_leaving_right_edge() {
        let field = SimulationConfig::default().field_bounds();
        // left edge at 1012.5, right edge at 1017.5
        let mut p = shot_at(1015.0, Projectile::DEFAULT_DIRECTION);
        p.advance(1.0, &field);
        // left edge 1022.5 is still inside
        assert!(p.active);
        p.advance(1.0, &field);
        assert!(!p.active);
    }

    #[test]
    fn test_deactivates_past_left_edge() {
        let field = SimulationConfig::default().field_bounds();
        let mut p = shot_at(5.0, Vec2::NEG_X);
        p.advance(1.0, &field);
        assert!(!p.active);
    }
}
