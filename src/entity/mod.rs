//! Entity records and the capabilities shared between them
//!
//! Each record owns its own update rule (`advance`). Collision and
//! presentation only need the [`Bounded`] capability and an [`EntityKind`]
//! tag, so they work over [`EntityRef`] instead of a class hierarchy.

pub mod hostile;
pub mod player;
pub mod projectile;
pub mod resource;
pub mod vitals;

pub use hostile::Hostile;
pub use player::{Inventory, Player};
pub use projectile::Projectile;
pub use resource::Resource;
pub use vitals::{VitalType, Vitals};

use serde::{Deserialize, Serialize};

use crate::core::geometry::Aabb;

/// Anything with a collision box
pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

impl<T: Bounded> Bounded for &T {
    fn bounds(&self) -> Aabb {
        (**self).bounds()
    }
}

/// Entity category, also the key for asset lookup and placeholder colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Player,
    Hostile,
    Resource,
    Projectile,
}

/// Borrowed view over any entity record
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Hostile(&'a Hostile),
    Resource(&'a Resource),
    Projectile(&'a Projectile),
}

impl EntityRef<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Player(_) => EntityKind::Player,
            EntityRef::Hostile(_) => EntityKind::Hostile,
            EntityRef::Resource(_) => EntityKind::Resource,
            EntityRef::Projectile(_) => EntityKind::Projectile,
        }
    }

    /// Logical asset name used by the presentation layer
    pub fn asset_name(&self) -> &'static str {
        match self {
            EntityRef::Player(_) => "player",
            EntityRef::Hostile(_) => "enemy",
            EntityRef::Resource(r) => r.kind.asset_name(),
            EntityRef::Projectile(_) => "bullet",
        }
    }
}

impl Bounded for EntityRef<'_> {
    fn bounds(&self) -> Aabb {
        match self {
            EntityRef::Player(p) => p.bounds(),
            EntityRef::Hostile(h) => h.bounds(),
            EntityRef::Resource(r) => r.bounds(),
            EntityRef::Projectile(p) => p.bounds(),
        }
    }
}
