//! Simulation configuration with documented constants
//!
//! All tuning numbers live here. Rates and speeds are expressed per
//! *reference frame*: one tick at `timing.tick_rate`. A tick of a different
//! length scales them through [`SimulationConfig::frames`], so the numbers
//! below read exactly like the per-frame behavior at 60 Hz.
//!
//! Every section is `#[serde(default)]`, so a TOML file only needs the keys
//! it wants to override.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::error::{Result, SurvivalError};
use crate::core::geometry::Aabb;

/// Resolution of [`SimulationConfig::frames`]: steps per reference frame
const FRAME_QUANTUM: f64 = 1_000_000.0;

/// Play-field extents (pixels)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Clock settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed simulation rate in ticks per second
    pub tick_rate: u32,
    /// Maximum ticks a frontend may run to catch up after a stall
    ///
    /// Past this the backlog is dropped rather than spiralling.
    pub max_catch_up_steps: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            max_catch_up_steps: 5,
        }
    }
}

/// Player tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Bounding box edge length
    pub size: f32,
    /// Pixels moved per reference frame along each held axis
    pub speed: f32,
    /// Minimum simulated time between shots
    pub fire_cooldown_ms: u64,
    /// Upper bound and starting value of every vital stat
    pub vital_max: f64,

    // === DECAY (per reference frame) ===
    pub hunger_decay: f64,
    pub thirst_decay: f64,
    pub energy_decay: f64,

    // === REWARDS ===
    /// Hunger restored by a food pickup
    pub food_restore: f64,
    /// Thirst restored by a water pickup
    pub water_restore: f64,
    /// Score for any pickup
    pub collect_score: u32,
    /// Score for destroying a hostile
    pub kill_score: u32,

    /// Health lost per frame of contact with one or more hostiles
    pub contact_damage: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 30.0,
            speed: 5.0,
            fire_cooldown_ms: 500,
            vital_max: 100.0,
            hunger_decay: 0.01,
            thirst_decay: 0.02,
            energy_decay: 0.005,
            food_restore: 20.0,
            water_restore: 20.0,
            collect_score: 10,
            kill_score: 50,
            contact_damage: 1.0,
        }
    }
}

/// Hostile tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileConfig {
    pub size: f32,
    /// Pixels moved per reference frame toward the player
    pub speed: f32,
    pub health: i32,
    /// Health removed by one projectile hit
    pub damage_per_hit: i32,
    /// Initial population (not replenished during play)
    pub population: usize,
}

impl Default for HostileConfig {
    fn default() -> Self {
        Self {
            size: 30.0,
            speed: 2.0,
            health: 30,
            damage_per_hit: 10,
            population: 5,
        }
    }
}

/// Resource tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub size: f32,
    /// Population kept constant while playing
    pub population: usize,
    /// Animation phase advance per reference frame (radians)
    pub bob_rate: f32,
    /// Vertical drift per reference frame at the crest of the bob
    pub bob_amplitude: f32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            size: 30.0,
            population: 10,
            bob_rate: 0.1,
            bob_amplitude: 0.5,
        }
    }
}

/// Projectile tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub size: f32,
    /// Pixels moved per reference frame
    pub speed: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            size: 5.0,
            speed: 10.0,
        }
    }
}

/// Configuration for the whole simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub field: FieldConfig,
    pub timing: TimingConfig,
    pub player: PlayerConfig,
    pub hostile: HostileConfig,
    pub resource: ResourceConfig,
    pub projectile: ProjectileConfig,
    /// Seed for spawn positions, resource kinds and background decoration
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            timing: TimingConfig::default(),
            player: PlayerConfig::default(),
            hostile: HostileConfig::default(),
            resource: ResourceConfig::default(),
            projectile: ProjectileConfig::default(),
            seed: 12345,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The play field as a box at the origin
    pub fn field_bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.field.width, self.field.height))
    }

    /// Duration of one reference frame
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.timing.tick_rate.max(1)))
    }

    /// Number of reference frames covered by `dt`
    ///
    /// Quantized to millionths of a frame, so the nanosecond rounding in
    /// [`Self::tick_duration`] still yields exactly 1.0 per tick.
    pub fn frames(&self, dt: Duration) -> f64 {
        let frames = dt.as_secs_f64() * f64::from(self.timing.tick_rate);
        (frames * FRAME_QUANTUM).round() / FRAME_QUANTUM
    }

    pub fn fire_cooldown(&self) -> Duration {
        Duration::from_millis(self.player.fire_cooldown_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            return Err(SurvivalError::InvalidConfig(format!(
                "field extents must be positive, got {}x{}",
                self.field.width, self.field.height
            )));
        }

        if self.timing.tick_rate == 0 {
            return Err(SurvivalError::InvalidConfig(
                "tick_rate must be at least 1".into(),
            ));
        }

        let largest = self
            .player
            .size
            .max(self.hostile.size)
            .max(self.resource.size)
            .max(self.projectile.size);
        if largest > self.field.width.min(self.field.height) {
            return Err(SurvivalError::InvalidConfig(format!(
                "entity size {} does not fit a {}x{} field",
                largest, self.field.width, self.field.height
            )));
        }

        let speeds = [self.player.speed, self.hostile.speed, self.projectile.speed];
        let decays = [
            self.player.hunger_decay,
            self.player.thirst_decay,
            self.player.energy_decay,
        ];
        if speeds.iter().any(|s| *s < 0.0) || decays.iter().any(|d| *d < 0.0) {
            return Err(SurvivalError::InvalidConfig(
                "speeds and decay rates must not be negative".into(),
            ));
        }

        if self.hostile.health <= 0 || self.hostile.damage_per_hit <= 0 {
            return Err(SurvivalError::InvalidConfig(
                "hostile health and damage_per_hit must be positive".into(),
            ));
        }

        if self.player.vital_max <= 0.0 {
            return Err(SurvivalError::InvalidConfig(
                "vital_max must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Load and validate a config from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config: SimulationConfig = toml::from_str(&contents)?;
    if let Err(e) = config.validate() {
        tracing::warn!("Rejected config {:?}: {}", path, e);
        return Err(e);
    }
    tracing::debug!("Loaded simulation config from {:?}", path);
    Ok(config)
}
