//! Events produced by a simulation tick
//!
//! Returned from `run_simulation_tick` for frontends: audio cues go to the
//! audio sink, the rest feeds logs and the autoplay summary.

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, ResourceKind, Tick};
use crate::entity::VitalType;

/// Fire-and-forget audio triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// A resource was picked up
    Collect,
    /// A projectile struck a hostile
    HostileHit,
}

impl SoundCue {
    /// Logical asset name of the sound
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundCue::Collect => "collect",
            SoundCue::HostileHit => "enemy_hit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// Audio cue for the audio collaborator
    Sound(SoundCue),
    ProjectileFired {
        id: EntityId,
    },
    ResourceCollected {
        id: EntityId,
        kind: ResourceKind,
    },
    /// Replacement for a collected resource
    ResourceSpawned {
        id: EntityId,
        kind: ResourceKind,
    },
    HostileHit {
        id: EntityId,
        remaining_health: i32,
    },
    HostileDestroyed {
        id: EntityId,
    },
    /// The player touched at least one hostile this frame
    ContactDamage {
        health: f64,
    },
    GameOver {
        tick: Tick,
        cause: VitalType,
        score: u32,
    },
    Restarted {
        tick: Tick,
    },
    QuitRequested,
}

impl SimulationEvent {
    pub fn sound(&self) -> Option<SoundCue> {
        match self {
            SimulationEvent::Sound(cue) => Some(*cue),
            _ => None,
        }
    }
}
