//! World - owns every entity pool, the RNG and the game phase

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{EntityId, EntityIdGenerator, ResourceKind, Tick};
use crate::entity::{EntityRef, Hostile, Player, Resource};
use crate::simulation::spawn;
use crate::simulation::state::GamePhase;

/// Number of decorative background points
pub const BACKGROUND_POINTS: usize = 100;

/// The game world
///
/// Passed by `&mut` to every system; there is no other shared state.
pub struct World {
    pub config: SimulationConfig,
    pub current_tick: Tick,
    pub phase: GamePhase,
    pub player: Player,
    /// Live hostiles in spawn order
    pub hostiles: Vec<Hostile>,
    /// Live resources in spawn order
    pub resources: Vec<Resource>,
    /// Decorative points generated once per world
    pub background: Vec<Vec2>,
    /// Deterministic source for every random choice
    pub rng: ChaCha8Rng,
    pub ids: EntityIdGenerator,
    /// Set by a `Quit` command; frontends stop after seeing it
    pub quit_requested: bool,
}

impl World {
    /// A populated world ready to play
    pub fn new(config: SimulationConfig) -> Self {
        let mut world = Self::empty(config);
        spawn::populate(&mut world);
        world
    }

    /// A world with the player but no hostiles or resources
    ///
    /// Useful for scripted scenarios that place entities by hand.
    pub fn empty(config: SimulationConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let background = spawn::background_points(&mut rng, &config, BACKGROUND_POINTS);
        Self {
            player: Player::new(&config),
            current_tick: 0,
            phase: GamePhase::Playing,
            hostiles: Vec::new(),
            resources: Vec::new(),
            background,
            rng,
            ids: EntityIdGenerator::new(),
            quit_requested: false,
            config,
        }
    }

    /// Place a hostile at an exact position
    pub fn spawn_hostile_at(&mut self, position: Vec2) -> EntityId {
        let id = self.ids.next();
        self.hostiles
            .push(Hostile::new(id, position, &self.config.hostile));
        id
    }

    /// Place a resource at an exact position
    pub fn spawn_resource_at(&mut self, kind: ResourceKind, position: Vec2) -> EntityId {
        let id = self.ids.next();
        self.resources
            .push(Resource::new(id, kind, position, &self.config.resource));
        id
    }

    /// Reset the player and regenerate both pools
    ///
    /// The tick counter and background are left alone.
    pub fn reset_run(&mut self) {
        self.player.reset(&self.config);
        spawn::populate(self);
    }

    pub fn hostile(&self, id: EntityId) -> Option<&Hostile> {
        self.hostiles.iter().find(|h| h.id == id)
    }

    pub fn resource(&self, id: EntityId) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Every live entity in draw order: player, hostiles, resources, projectiles
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> + '_ {
        std::iter::once(EntityRef::Player(&self.player))
            .chain(self.hostiles.iter().map(EntityRef::Hostile))
            .chain(self.resources.iter().map(EntityRef::Resource))
            .chain(self.player.projectiles.iter().map(EntityRef::Projectile))
    }

    pub fn entity_count(&self) -> usize {
        1 + self.hostiles.len() + self.resources.len() + self.player.projectiles.len()
    }

    pub fn tick(&mut self) {
        self.current_tick += 1;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
