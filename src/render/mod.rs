//! Presentation boundary
//!
//! Builds a read-only snapshot of the world for whatever frontend draws it:
//! entity boxes with their visual identity, the HUD lines and the game-over
//! banner. This module never modifies simulation state.

pub mod assets;
pub mod colors;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, ResourceKind, Tick};
use crate::ecs::world::World;
use crate::entity::{Bounded, EntityKind, EntityRef, Player};

pub const GAME_OVER_BANNER: &str = "GAME OVER! Press R to restart";

/// Lightweight snapshot of an entity for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEntity {
    pub kind: EntityKind,
    /// `None` for the player
    pub id: Option<EntityId>,
    pub position: Vec2,
    pub size: Vec2,
    /// Degrees; only hostiles turn
    pub facing: f32,
    pub resource: Option<ResourceKind>,
    /// Logical asset name for sprite lookup
    pub asset: String,
}

impl RenderEntity {
    fn from_ref(entity: EntityRef<'_>) -> Self {
        let bounds = entity.bounds();
        let (id, facing, resource) = match entity {
            EntityRef::Player(_) => (None, 0.0, None),
            EntityRef::Hostile(h) => (Some(h.id), h.facing, None),
            EntityRef::Resource(r) => (Some(r.id), 0.0, Some(r.kind)),
            EntityRef::Projectile(p) => (Some(p.id), 0.0, None),
        };
        Self {
            kind: entity.kind(),
            id,
            position: bounds.min,
            size: bounds.size,
            facing,
            resource,
            asset: entity.asset_name().to_string(),
        }
    }
}

/// HUD values, already truncated for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub health: i32,
    pub hunger: i32,
    pub thirst: i32,
    pub energy: i32,
    pub score: u32,
    pub food: u32,
    pub water: u32,
    pub wood: u32,
}

impl Hud {
    pub fn from_player(player: &Player) -> Self {
        let vitals = &player.vitals;
        // truncation toward zero; vitals are clamped so nothing shows below 0
        Self {
            health: vitals.reported_health() as i32,
            hunger: vitals.hunger.max(0.0) as i32,
            thirst: vitals.thirst.max(0.0) as i32,
            energy: vitals.energy.max(0.0) as i32,
            score: player.score,
            food: player.inventory.food,
            water: player.inventory.water,
            wood: player.inventory.wood,
        }
    }

    /// The fixed HUD lines, top to bottom
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Health: {}", self.health),
            format!("Hunger: {}", self.hunger),
            format!("Thirst: {}", self.thirst),
            format!("Energy: {}", self.energy),
            format!("Score: {}", self.score),
            format!("Food: {} Water: {} Wood: {}", self.food, self.water, self.wood),
        ]
    }
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: Tick,
    pub field: Vec2,
    pub background: Vec<Vec2>,
    pub entities: Vec<RenderEntity>,
    pub hud: Hud,
    pub banner: Option<String>,
}

impl FrameSnapshot {
    pub fn hud_lines(&self) -> Vec<String> {
        self.hud.lines()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}

/// Collects all renderable entities into a reusable buffer, in draw order.
/// Call once per frame with the same buffer to avoid allocations.
pub fn collect_render_entities(world: &World, buffer: &mut Vec<RenderEntity>) {
    buffer.clear();
    buffer.extend(world.entities().map(RenderEntity::from_ref));
}

/// Build the full presentation snapshot
pub fn snapshot(world: &World) -> FrameSnapshot {
    let mut entities = Vec::with_capacity(world.entity_count());
    collect_render_entities(world, &mut entities);
    FrameSnapshot {
        tick: world.current_tick,
        field: Vec2::new(world.config.field.width, world.config.field.height),
        background: world.background.clone(),
        entities,
        hud: Hud::from_player(&world.player),
        banner: (!world.phase.is_playing()).then(|| GAME_OVER_BANNER.to_string()),
    }
}
