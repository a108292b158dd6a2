//! Collectable resources

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::config::ResourceConfig;
use crate::core::geometry::Aabb;
use crate::core::types::{EntityId, ResourceKind};
use crate::entity::Bounded;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: EntityId,
    pub kind: ResourceKind,
    pub position: Vec2,
    /// Bobbing animation phase in radians
    pub phase: f32,
    pub size: Vec2,
}

impl Resource {
    pub fn new(id: EntityId, kind: ResourceKind, position: Vec2, config: &ResourceConfig) -> Self {
        Self {
            id,
            kind,
            position,
            phase: 0.0,
            size: Vec2::splat(config.size),
        }
    }

    /// Cosmetic bob: drift vertically along a sine of the accumulated phase
    pub fn advance(&mut self, frames: f32, config: &ResourceConfig) {
        self.phase += config.bob_rate * frames;
        self.position.y += self.phase.sin() * config.bob_amplitude * frames;
    }
}

impl Bounded for Resource {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}
