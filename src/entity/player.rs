//! The player-controlled survivor

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::config::SimulationConfig;
use crate::core::geometry::Aabb;
use crate::core::types::{EntityIdGenerator, ResourceKind};
use crate::entity::projectile::Projectile;
use crate::entity::vitals::{VitalType, Vitals};
use crate::entity::Bounded;
use crate::simulation::input::PlayerInput;

/// Collected resource counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub food: u32,
    pub water: u32,
    pub wood: u32,
}

impl Inventory {
    pub fn add(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Food => self.food += 1,
            ResourceKind::Water => self.water += 1,
            ResourceKind::Wood => self.wood += 1,
        }
    }

    pub fn count(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Water => self.water,
            ResourceKind::Wood => self.wood,
        }
    }

    pub fn total(&self) -> u32 {
        self.food + self.water + self.wood
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub position: Vec2,
    pub size: Vec2,
    /// Pixels per reference frame along each held axis
    pub speed: f32,
    pub vitals: Vitals,
    pub score: u32,
    pub inventory: Inventory,
    /// Simulated time since the last shot; `None` until the first one
    since_last_shot: Option<Duration>,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
}

impl Player {
    /// A fresh player centred in the field
    pub fn new(config: &SimulationConfig) -> Self {
        let size = Vec2::splat(config.player.size);
        let center = config.field_bounds().center();
        Self {
            position: center - size * 0.5,
            size,
            speed: config.player.speed,
            vitals: Vitals::full(config.player.vital_max),
            score: 0,
            inventory: Inventory::default(),
            since_last_shot: None,
            projectiles: Vec::new(),
        }
    }

    /// Restore the starting state in place
    pub fn reset(&mut self, config: &SimulationConfig) {
        *self = Self::new(config);
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// One frame of player control
    ///
    /// Moves along every held axis (diagonals are not normalized), keeps the
    /// box inside the field, fires if asked, decays vitals and flies the
    /// owned projectiles. Returns whether a projectile was fired.
    pub fn advance(
        &mut self,
        input: &PlayerInput,
        dt: Duration,
        config: &SimulationConfig,
        ids: &mut EntityIdGenerator,
    ) -> bool {
        let frames = config.frames(dt);
        let field = config.field_bounds();

        let step = self.speed * frames as f32;
        let mut delta = Vec2::ZERO;
        if input.left {
            delta.x -= step;
        }
        if input.right {
            delta.x += step;
        }
        if input.up {
            delta.y -= step;
        }
        if input.down {
            delta.y += step;
        }
        self.position += delta;
        self.position = self.bounds().clamped_within(&field);

        if let Some(elapsed) = self.since_last_shot.as_mut() {
            *elapsed += dt;
        }
        let fired = input.fire && self.fire(config, ids);

        self.vitals.decay(frames, &config.player);

        for projectile in &mut self.projectiles {
            projectile.advance(frames as f32, &field);
        }
        self.projectiles.retain(|p| p.active);

        fired
    }

    pub fn can_fire(&self, cooldown: Duration) -> bool {
        self.since_last_shot.map_or(true, |elapsed| elapsed >= cooldown)
    }

    /// Spawn a projectile if the cooldown has elapsed
    pub fn fire(&mut self, config: &SimulationConfig, ids: &mut EntityIdGenerator) -> bool {
        if !self.can_fire(config.fire_cooldown()) {
            return false;
        }
        let projectile = Projectile::new(
            ids.next(),
            self.center(),
            Projectile::DEFAULT_DIRECTION,
            config,
        );
        self.projectiles.push(projectile);
        self.since_last_shot = Some(Duration::ZERO);
        true
    }

    /// Pick up a resource of `kind`
    pub fn collect(&mut self, kind: ResourceKind, config: &SimulationConfig) {
        self.inventory.add(kind);
        match kind {
            ResourceKind::Food => self
                .vitals
                .restore(VitalType::Hunger, config.player.food_restore),
            ResourceKind::Water => self
                .vitals
                .restore(VitalType::Thirst, config.player.water_restore),
            ResourceKind::Wood => {}
        }
        self.score += config.player.collect_score;
    }

    /// One frame of touching at least one hostile
    pub fn apply_contact_damage(&mut self, config: &SimulationConfig) {
        self.vitals.damage(config.player.contact_damage);
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.depleted().is_some()
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (SimulationConfig, Player, EntityIdGenerator) {
        let config = SimulationConfig::default();
        let player = Player::new(&config);
        (config, player, EntityIdGenerator::new())
    }

    #[test]
    fn test_starts_centred_with_full_vitals() {
        let (_, player, _) = setup();
        assert_eq!(player.center(), Vec2::new(512.0, 384.0));
        assert_eq!(player.vitals, Vitals::full(100.0));
        assert_eq!(player.score, 0);
        assert_eq!(player.inventory.total(), 0);
    }

    #[test]
    fn test_diagonal_movement_is_not_normalized() {
        let (config, mut player, mut ids) = setup();
        let start = player.position;
        let input = PlayerInput {
            right: true,
            down: true,
            ..Default::default()
        };
        player.advance(&input, config.tick_duration(), &config, &mut ids);
        let moved = player.position - start;
        assert!((moved.x - 5.0).abs() < 1e-3);
        assert!((moved.y - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_opposite_axes_cancel() {
        let (config, mut player, mut ids) = setup();
        let start = player.position;
        let input = PlayerInput {
            left: true,
            right: true,
            ..Default::default()
        };
        player.advance(&input, config.tick_duration(), &config, &mut ids);
        assert_eq!(player.position, start);
    }

    #[test]
    fn test_stays_inside_field() {
        let (config, mut player, mut ids) = setup();
        let input = PlayerInput {
            left: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..500 {
            player.advance(&input, config.tick_duration(), &config, &mut ids);
        }
        assert_eq!(player.position, Vec2::ZERO);

        let input = PlayerInput {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..500 {
            player.advance(&input, config.tick_duration(), &config, &mut ids);
        }
        assert_eq!(player.bounds().right(), 1024.0);
        assert_eq!(player.bounds().bottom(), 768.0);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let (config, mut player, mut ids) = setup();
        assert!(player.fire(&config, &mut ids));
        assert!(!player.fire(&config, &mut ids));
        assert_eq!(player.projectiles.len(), 1);
    }

    #[test]
    fn test_projectile_spawns_at_centre_heading_right() {
        let (config, mut player, mut ids) = setup();
        player.fire(&config, &mut ids);
        let shot = &player.projectiles[0];
        assert_eq!(shot.bounds().center(), player.center());
        assert_eq!(shot.direction, Vec2::X);
    }

    #[test]
    fn test_collect_water_restores_thirst() {
        let (config, mut player, _) = setup();
        player.vitals.thirst = 50.0;
        player.collect(ResourceKind::Water, &config);
        assert_eq!(player.vitals.thirst, 70.0);
        assert_eq!(player.inventory.water, 1);
        assert_eq!(player.score, 10);
    }

    #[test]
    fn test_collect_wood_only_scores() {
        let (config, mut player, _) = setup();
        player.vitals.hunger = 40.0;
        player.vitals.thirst = 40.0;
        player.collect(ResourceKind::Wood, &config);
        assert_eq!(player.vitals.hunger, 40.0);
        assert_eq!(player.vitals.thirst, 40.0);
        assert_eq!(player.inventory.count(ResourceKind::Wood), 1);
        assert_eq!(player.score, 10);
    }

    #[test]
    fn test_reset_clears_progress() {
        let (config, mut player, mut ids) = setup();
        player.collect(ResourceKind::Food, &config);
        player.fire(&config, &mut ids);
        player.apply_contact_damage(&config);
        player.position = Vec2::new(3.0, 4.0);

        player.reset(&config);

        assert_eq!(player.score, 0);
        assert_eq!(player.inventory, Inventory::default());
        assert!(player.projectiles.is_empty());
        assert_eq!(player.vitals.health, 100.0);
        assert!(player.can_fire(config.fire_cooldown()));
        assert_eq!(player.center(), Vec2::new(512.0, 384.0));
    }
}
